//! Ping Handler
//!
//! 健康检查

use axum::Json;

use crate::infrastructure::http::dto::PingResponse;

/// Ping endpoint - 健康检查
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
