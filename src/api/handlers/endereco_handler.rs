//! Address handlers.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::config::{MSG_ENDERECO_ATUALIZADO, MSG_ENDERECO_CRIADO, MSG_ENDERECO_REMOVIDO};
use crate::domain::{CreateEndereco, Endereco, UpdateEndereco};
use crate::errors::AppResult;
use crate::types::{ApiResponse, EnderecoResponse, ListQuery, Paginated};

/// Create address routes
pub fn endereco_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_enderecos).post(create_endereco))
        .route(
            "/:uuid",
            get(get_endereco)
                .patch(update_endereco)
                .delete(delete_endereco),
        )
        .route("/cliente/:cliente_uuid", get(list_enderecos_by_cliente))
}

/// Create an address
#[utoipa::path(
    post,
    path = "/enderecos",
    tag = "Enderecos",
    security(("bearer_auth" = [])),
    request_body = CreateEndereco,
    responses(
        (status = 201, description = "Endereço criado com sucesso", body = EnderecoResponse),
        (status = 400, description = "Validation error or unknown client"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Erro interno ao criar endereço")
    )
)]
pub async fn create_endereco(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEndereco>,
) -> AppResult<ApiResponse<Endereco>> {
    tracing::debug!(user = %current_user.id, cliente = %payload.cliente_uuid, "Creating address");
    let endereco = state.endereco_service.create(payload).await?;

    Ok(ApiResponse::with_message(
        StatusCode::CREATED,
        endereco,
        MSG_ENDERECO_CRIADO,
    ))
}

/// List addresses, one page at a time
#[utoipa::path(
    get,
    path = "/enderecos",
    tag = "Enderecos",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Page of addresses", body = [Endereco],
            headers(
                ("x-total-count" = u64, description = "Rows matching the query"),
                ("x-total-pages" = u64, description = "Pages at the effective limit"),
                ("x-page" = u64, description = "Page returned"),
                ("x-limit" = u64, description = "Effective page size")
            )
        ),
        (status = 400, description = "Invalid page or limit"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "A página solicitada não contém resultados")
    )
)]
pub async fn list_enderecos(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Paginated<Endereco>> {
    state.endereco_service.find_all(query).await
}

/// List one client's addresses
#[utoipa::path(
    get,
    path = "/enderecos/cliente/{cliente_uuid}",
    tag = "Enderecos",
    security(("bearer_auth" = [])),
    params(
        ("cliente_uuid" = Uuid, Path, description = "Client uuid"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Page of the client's addresses", body = [Endereco],
            headers(
                ("x-total-count" = u64, description = "Rows matching the query"),
                ("x-total-pages" = u64, description = "Pages at the effective limit"),
                ("x-page" = u64, description = "Page returned"),
                ("x-limit" = u64, description = "Effective page size")
            )
        ),
        (status = 400, description = "Invalid page or limit"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "A página solicitada não contém resultados")
    )
)]
pub async fn list_enderecos_by_cliente(
    State(state): State<AppState>,
    Path(cliente_uuid): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> AppResult<Paginated<Endereco>> {
    state
        .endereco_service
        .find_by_cliente(cliente_uuid, query)
        .await
}

/// Get address by uuid
#[utoipa::path(
    get,
    path = "/enderecos/{uuid}",
    tag = "Enderecos",
    security(("bearer_auth" = [])),
    params(
        ("uuid" = Uuid, Path, description = "Address uuid")
    ),
    responses(
        (status = 200, description = "Address", body = EnderecoResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Endereço não encontrado")
    )
)]
pub async fn get_endereco(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
) -> AppResult<ApiResponse<Endereco>> {
    let endereco = state.endereco_service.find_one(uuid).await?;
    Ok(ApiResponse::ok(endereco))
}

/// Partially update an address
#[utoipa::path(
    patch,
    path = "/enderecos/{uuid}",
    tag = "Enderecos",
    security(("bearer_auth" = [])),
    params(
        ("uuid" = Uuid, Path, description = "Address uuid")
    ),
    request_body = UpdateEndereco,
    responses(
        (status = 200, description = "Endereço atualizado com sucesso", body = EnderecoResponse),
        (status = 400, description = "Validation error or unknown client"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Endereço não encontrado"),
        (status = 500, description = "Erro ao atualizar endereço")
    )
)]
pub async fn update_endereco(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateEndereco>,
) -> AppResult<ApiResponse<Endereco>> {
    tracing::debug!(user = %current_user.id, %uuid, "Updating address");
    let endereco = state.endereco_service.update(uuid, payload).await?;

    Ok(ApiResponse::with_message(
        StatusCode::OK,
        endereco,
        MSG_ENDERECO_ATUALIZADO,
    ))
}

/// Delete an address
#[utoipa::path(
    delete,
    path = "/enderecos/{uuid}",
    tag = "Enderecos",
    security(("bearer_auth" = [])),
    params(
        ("uuid" = Uuid, Path, description = "Address uuid")
    ),
    responses(
        (status = 200, description = "Endereço removido com sucesso"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Endereço não encontrado"),
        (status = 500, description = "Erro ao remover endereço")
    )
)]
pub async fn delete_endereco(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
) -> AppResult<ApiResponse<()>> {
    tracing::debug!(user = %current_user.id, %uuid, "Deleting address");
    state.endereco_service.remove(uuid).await?;

    Ok(ApiResponse::message(StatusCode::OK, MSG_ENDERECO_REMOVIDO))
}
