//! HTTP Middleware
//!
//! 请求管线（外层先执行）:
//! 1. request_logging_middleware  记录请求行与写操作请求体，之后记录响应状态；始终转发
//! 2. validate_menu_item          POST/PUT 载荷执行校验规则，结果写入 extensions
//! 3. respond_to_violations       存在违规信息时直接返回 400，不进入 handler
//!
//! 每一层要么原样转发请求，要么直接给出响应

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::Request,
    http::{request::Parts, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use http_body_util::LengthLimitError;
use serde_json::{Map, Value};
use std::error::Error as StdError;

use super::error::ApiError;
use crate::domain::MenuItemDraft;

/// 当前请求累计的校验违规信息
#[derive(Debug, Clone, Default)]
pub struct Violations(pub Vec<String>);

impl Violations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 请求体读取失败
///
/// 日志层读取失败时写入 extensions 并继续转发，由校验层给出响应
#[derive(Debug, Clone)]
pub struct BodyReadFailure {
    pub too_large: bool,
    pub detail: String,
}

impl BodyReadFailure {
    fn from_error(err: axum::Error) -> Self {
        Self {
            too_large: exceeds_length_limit(&err),
            detail: format!("Failed to read request body: {}", err),
        }
    }
}

impl From<BodyReadFailure> for ApiError {
    fn from(failure: BodyReadFailure) -> Self {
        if failure.too_large {
            ApiError::PayloadTooLarge(failure.detail)
        } else {
            ApiError::MalformedBody(failure.detail)
        }
    }
}

/// 沿错误链查找 `Limited` 请求体的超限错误
fn exceeds_length_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}

fn carries_payload(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT
}

async fn buffer_body(request: Request) -> (Parts, Result<Bytes, BodyReadFailure>) {
    let (parts, body) = request.into_parts();
    // 大小上限由外层 RequestBodyLimitLayer 负责
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(BodyReadFailure::from_error);
    (parts, bytes)
}

// ============================================================================
// Request Logger
// ============================================================================

/// 请求日志中间件
///
/// 记录 ISO-8601 时间戳、方法、路径；POST/PUT 额外记录格式化后的请求体。
/// 从不拒绝请求：请求体读取失败时只记录并以空请求体转发。
/// 响应返回后，4xx 记 warn，5xx 记 error
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let method = request.method().clone();
    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    tracing::info!("[{}] {} {}", timestamp, method, target);

    let request = if carries_payload(&method) {
        let (mut parts, bytes) = buffer_body(request).await;
        let body = match bytes {
            Ok(bytes) => {
                tracing::info!("Request Body: {}", render_body(&bytes));
                Body::from(bytes)
            }
            Err(failure) => {
                tracing::warn!(error = %failure.detail, "Request Body: <unreadable>");
                parts.extensions.insert(failure);
                Body::empty()
            }
        };
        Request::from_parts(parts, body)
    } else {
        request
    };

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %target,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %target,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

fn render_body(bytes: &Bytes) -> String {
    if bytes.is_empty() {
        return "<empty>".to_string();
    }
    serde_json::from_slice::<Value>(bytes)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| String::from_utf8_lossy(bytes).into_owned())
}

// ============================================================================
// Validation
// ============================================================================

/// 菜单项载荷校验中间件
///
/// 仅处理 POST/PUT。请求体超限返回 413，无法读取或非法 JSON 返回 400，
/// 空请求体按 `{}` 处理。通过校验时额外写入 `MenuItemDraft` 供 handler 提取
pub async fn validate_menu_item(request: Request, next: Next) -> Response {
    if !carries_payload(request.method()) {
        return next.run(request).await;
    }

    if let Some(failure) = request.extensions().get::<BodyReadFailure>() {
        return ApiError::from(failure.clone()).into_response();
    }

    let (mut parts, bytes) = buffer_body(request).await;
    let bytes = match bytes {
        Ok(bytes) => bytes,
        Err(failure) => return ApiError::from(failure).into_response(),
    };

    let payload = if bytes.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Map::new())
    } else {
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => value,
            Err(e) => return ApiError::MalformedBody(e.to_string()).into_response(),
        }
    };

    match MenuItemDraft::try_from_payload(payload) {
        Ok(draft) => {
            parts.extensions.insert(Violations::default());
            parts.extensions.insert(draft);
        }
        Err(messages) => {
            parts.extensions.insert(Violations(messages));
        }
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

// ============================================================================
// Error Responder
// ============================================================================

/// 校验结果闸门：有违规信息则返回 400，否则原样放行
pub async fn respond_to_violations(request: Request, next: Next) -> Response {
    if let Some(violations) = request.extensions().get::<Violations>() {
        if !violations.is_empty() {
            return ApiError::Validation(violations.0.clone()).into_response();
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{Request as HttpRequest, StatusCode},
        routing::{get, post},
        Extension, Json, Router,
    };
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tower::util::ServiceExt;
    use tracing_subscriber::fmt::MakeWriter;

    /// 收集 fmt 输出的内存 writer
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// 当前线程内生效，`#[tokio::test]` 默认单线程运行时
    fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .without_time()
            .with_level(false)
            .with_target(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    fn failing_body() -> Body {
        let stream = futures_util::stream::once(async {
            Err::<Bytes, _>(io::Error::new(io::ErrorKind::ConnectionReset, "client went away"))
        });
        Body::from_stream(stream)
    }

    async fn ok_handler() -> &'static str {
        "OK"
    }

    async fn echo_draft(Extension(draft): Extension<MenuItemDraft>) -> Json<MenuItemDraft> {
        Json(draft)
    }

    async fn error_handler() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(ok_handler).post(ok_handler))
            .route("/draft", post(echo_draft).get(ok_handler))
            .route("/error", get(error_handler))
            .route_layer(axum::middleware::from_fn(respond_to_violations))
            .route_layer(axum::middleware::from_fn(validate_menu_item))
            .layer(axum::middleware::from_fn(request_logging_middleware))
    }

    fn post_json(uri: &str, body: &str) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_passes_through() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/draft?verbose=1")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_valid_payload_reaches_handler_as_draft() {
        let app = create_test_router();
        let body = json!({
            "name": "  Taco ",
            "description": "Crispy corn taco",
            "price": 4.5,
            "category": "entree",
            "ingredients": ["corn"]
        });

        let response = app
            .oneshot(post_json("/draft", &body.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let draft = body_json(response).await;
        assert_eq!(draft["name"], json!("Taco"));
        assert_eq!(draft["available"], json!(true));
    }

    #[tokio::test]
    async fn test_invalid_payload_short_circuits() {
        let app = create_test_router();
        let response = app.oneshot(post_json("/ok", "{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["Error"], json!("Validation Fail"));
        assert_eq!(body["Message"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_empty_body_is_treated_as_empty_object() {
        let app = create_test_router();
        let response = app.oneshot(post_json("/ok", "")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["Error"], json!("Validation Fail"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let app = create_test_router();
        let response = app.oneshot(post_json("/ok", "{\"name\":")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["Error"], json!("Malformed Request Body"));
    }

    #[tokio::test]
    async fn test_server_error_passes_through_logger() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/error")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_render_body() {
        assert_eq!(render_body(&Bytes::new()), "<empty>");
        assert_eq!(render_body(&Bytes::from_static(b"not json")), "not json");
        assert_eq!(
            render_body(&Bytes::from_static(b"{\"a\":1}")),
            "{\n  \"a\": 1\n}"
        );
    }

    #[tokio::test]
    async fn test_logger_records_request_line_and_body() {
        let (logs, _guard) = capture_logs();
        let app = create_test_router();
        let body = json!({
            "name": "Taco",
            "description": "Crispy corn taco",
            "price": 4.5,
            "category": "entree",
            "ingredients": ["corn"]
        });

        let response = app
            .oneshot(post_json("/draft", &body.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let output = logs.text();
        let request_line = output
            .lines()
            .map(str::trim)
            .find(|line| line.ends_with("] POST /draft"))
            .unwrap_or_else(|| panic!("no request line in:\n{}", output));
        let timestamp = request_line
            .strip_prefix('[')
            .and_then(|rest| rest.split(']').next())
            .unwrap();
        assert!(
            chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(),
            "not an ISO-8601 timestamp: {}",
            timestamp
        );

        assert!(output.contains("Request Body: {\n"), "{}", output);
        assert!(output.contains("\n  \"name\": \"Taco\""), "{}", output);
    }

    #[tokio::test]
    async fn test_logger_skips_body_for_get() {
        let (logs, _guard) = capture_logs();
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/ok?page=2")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let output = logs.text();
        assert!(output.contains("] GET /ok?page=2"), "{}", output);
        assert!(!output.contains("Request Body:"), "{}", output);
    }

    #[tokio::test]
    async fn test_logger_forwards_unreadable_body() {
        let app = Router::new()
            .route("/ok", post(ok_handler))
            .layer(axum::middleware::from_fn(request_logging_middleware));
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/ok")
            .body(failing_body())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unreadable_body_is_answered_by_validation() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/draft")
            .body(failing_body())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["Error"], json!("Malformed Request Body"));
    }

    #[tokio::test]
    async fn test_length_limit_error_is_detected() {
        let limited = to_bytes(Body::from("too long"), 2).await.unwrap_err();
        assert!(exceeds_length_limit(&limited));

        let reset = to_bytes(failing_body(), usize::MAX).await.unwrap_err();
        assert!(!exceeds_length_limit(&reset));
    }
}
