//! HTTP Error Handling
//!
//! 所有错误响应均为 JSON：顶层 `Error` 标签，校验类错误附带 `Message` 列表

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: &'static str,
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub message: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: &'static str) -> Self {
        Self {
            error,
            message: None,
        }
    }

    pub fn with_messages(error: &'static str, messages: Vec<String>) -> Self {
        Self {
            error,
            message: Some(messages),
        }
    }
}

/// 错误标签定义（客户端按原文匹配）
pub mod label {
    pub const NOT_FOUND: &str = "Menu Item Not Found";
    pub const VALIDATION_FAIL: &str = "Validation Fail";
    pub const MALFORMED_BODY: &str = "Malformed Request Body";
    pub const PAYLOAD_TOO_LARGE: &str = "Payload Too Large";
    pub const ROUTE_NOT_FOUND: &str = "Route Not Found";
    pub const INTERNAL_ERROR: &str = "Internal Server Error";
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 菜单项不存在（含无法解析的 ID）
    NotFound(String),
    /// 载荷未通过校验规则
    Validation(Vec<String>),
    /// 请求体无法读取或不是合法 JSON
    MalformedBody(String),
    /// 请求体超过 `server.max_body_bytes`
    PayloadTooLarge(String),
    RouteNotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, ErrorResponse::new(label::NOT_FOUND))
            }
            ApiError::Validation(messages) => {
                tracing::warn!(violations = ?messages, "Validation failed");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_messages(label::VALIDATION_FAIL, messages),
                )
            }
            ApiError::MalformedBody(msg) => {
                tracing::warn!(error = %msg, "Malformed request body");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_messages(label::MALFORMED_BODY, vec![msg]),
                )
            }
            ApiError::PayloadTooLarge(msg) => {
                tracing::warn!(error = %msg, "Request body too large");
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    ErrorResponse::new(label::PAYLOAD_TOO_LARGE),
                )
            }
            ApiError::RouteNotFound(path) => {
                tracing::warn!(path = %path, "Route not found");
                (StatusCode::NOT_FOUND, ErrorResponse::new(label::ROUTE_NOT_FOUND))
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(label::INTERNAL_ERROR),
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuItemId;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn render(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, body) = render(ApiError::NotFound("id 9".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "Error": "Menu Item Not Found" }));
    }

    #[tokio::test]
    async fn test_validation_body_lists_messages() {
        let messages = vec!["a".to_string(), "b".to_string()];
        let (status, body) = render(ApiError::Validation(messages)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "Error": "Validation Fail", "Message": ["a", "b"] }));
    }

    #[tokio::test]
    async fn test_payload_too_large_body() {
        let (status, body) =
            render(ApiError::PayloadTooLarge("length limit exceeded".to_string())).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body, json!({ "Error": "Payload Too Large" }));
    }

    #[tokio::test]
    async fn test_internal_hides_detail() {
        let (status, body) = render(ApiError::Internal("lock poisoned".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "Error": "Internal Server Error" }));
    }

    #[test]
    fn test_application_error_mapping() {
        let not_found = ApplicationError::not_found("Menu item", MenuItemId::new(4));
        assert!(matches!(ApiError::from(not_found), ApiError::NotFound(_)));

        let repo = ApplicationError::RepositoryError("boom".to_string());
        assert!(matches!(ApiError::from(repo), ApiError::Internal(_)));
    }
}
