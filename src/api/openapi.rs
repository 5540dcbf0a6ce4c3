//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI at `/swagger-ui`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::endereco_handler;
use crate::domain::{CreateEndereco, Endereco, UpdateEndereco};
use crate::types::EnderecoResponse;

/// OpenAPI documentation for the address API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Endereço API",
        version = "0.1.0",
        description = "CRUD for client addresses, backed by PostgreSQL"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        endereco_handler::create_endereco,
        endereco_handler::list_enderecos,
        endereco_handler::list_enderecos_by_cliente,
        endereco_handler::get_endereco,
        endereco_handler::update_endereco,
        endereco_handler::delete_endereco,
    ),
    components(
        schemas(
            Endereco,
            CreateEndereco,
            UpdateEndereco,
            EnderecoResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Enderecos", description = "Address management operations")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT issued by the authentication module"))
                        .build(),
                ),
            );
        }
    }
}
