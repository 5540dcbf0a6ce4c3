//! Response envelope used by the address endpoints.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Endereco;

/// `{ status, message?, data? }` envelope.
///
/// The HTTP status of the response mirrors the `status` field.
#[derive(Debug, Serialize, ToSchema)]
#[aliases(EnderecoResponse = ApiResponse<Endereco>)]
pub struct ApiResponse<T> {
    #[schema(example = 200)]
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: Some(message.into()),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_envelope_status() {
        let response = ApiResponse::with_message(StatusCode::CREATED, 42, "criado");
        assert_eq!(response.status, 201);
        assert_eq!(response.into_response().status(), StatusCode::CREATED);
    }

    #[test]
    fn test_message_only_omits_data() {
        let response = ApiResponse::message(StatusCode::OK, "removido");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], 200);
        assert_eq!(json["message"], "removido");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_ok_omits_message() {
        let json = serde_json::to_value(ApiResponse::ok("x")).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["data"], "x");
    }
}
