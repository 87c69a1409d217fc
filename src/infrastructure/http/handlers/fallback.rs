//! 未匹配路由

use axum::http::Uri;

use crate::infrastructure::http::error::ApiError;

pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}
