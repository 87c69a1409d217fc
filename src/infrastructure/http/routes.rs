//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping          GET     健康检查
//! - /api/menu          GET     列出所有菜单项
//! - /api/menu          POST    创建菜单项（校验）
//! - /api/menu/:id      GET     获取菜单项
//! - /api/menu/:id      PUT     整体更新菜单项（校验）
//! - /api/menu/:id      DELETE  删除菜单项

use axum::{middleware, routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::middleware::{respond_to_violations, validate_menu_item};
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .fallback(handlers::route_not_found)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/menu", menu_routes())
}

/// Menu 路由
///
/// route_layer 后添加者先执行：校验 -> 错误响应 -> handler
fn menu_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_menu_items).post(handlers::create_menu_item),
        )
        .route(
            "/:id",
            get(handlers::get_menu_item)
                .put(handlers::update_menu_item)
                .delete(handlers::delete_menu_item),
        )
        .route_layer(middleware::from_fn(respond_to_violations))
        .route_layer(middleware::from_fn(validate_menu_item))
}
