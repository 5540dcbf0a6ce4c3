//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;

/// Caller identity taken from a verified token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
}

/// JWT authentication middleware.
///
/// Rejects the request with 401 unless the Authorization header carries a
/// valid Bearer token, then injects the CurrentUser into the request
/// extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify_token(token)?;

    tracing::debug!(user = %claims.sub, path = %request.uri().path(), "Authenticated request");

    request.extensions_mut().insert(CurrentUser {
        id: claims.sub,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        extract::Extension,
        http::{Request as HttpRequest, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use chrono::Utc;
    use sea_orm::DatabaseConnection;
    use tower::ServiceExt;

    use super::*;
    use crate::infra::{Database, MockEnderecoRepository};
    use crate::services::{Claims, EnderecoManager, MockAuthService};

    fn router(auth: MockAuthService) -> Router {
        let state = AppState::new(
            Arc::new(auth),
            Arc::new(EnderecoManager::new(
                Arc::new(MockEnderecoRepository::new()),
                10,
            )),
            Arc::new(Database::from_connection(DatabaseConnection::Disconnected)),
        );

        Router::new()
            .route(
                "/whoami",
                get(|Extension(user): Extension<CurrentUser>| async move { user.email }),
            )
            .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_verified_claims_become_current_user() {
        let mut auth = MockAuthService::new();
        auth.expect_verify_token()
            .withf(|token| token == "abc")
            .returning(|_| {
                Ok(Claims {
                    sub: Uuid::new_v4(),
                    email: "operador@example.com".to_string(),
                    exp: Utc::now().timestamp() + 60,
                    iat: Utc::now().timestamp(),
                })
            });

        let response = router(auth)
            .oneshot(
                HttpRequest::get("/whoami")
                    .header(AUTHORIZATION, "Bearer abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"operador@example.com");
    }

    #[tokio::test]
    async fn test_rejected_token_is_unauthorized() {
        let mut auth = MockAuthService::new();
        auth.expect_verify_token()
            .returning(|_| Err(AppError::Unauthorized));

        let response = router(auth)
            .oneshot(
                HttpRequest::get("/whoami")
                    .header(AUTHORIZATION, "Bearer nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_missing_header_skips_verifier() {
        let mut auth = MockAuthService::new();
        auth.expect_verify_token().never();

        let response = router(auth)
            .oneshot(HttpRequest::get("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
