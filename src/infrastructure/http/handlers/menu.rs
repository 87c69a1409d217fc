//! Menu HTTP Handlers
//!
//! POST/PUT 的载荷在进入 handler 前已由校验中间件转换为 `MenuItemDraft`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

use crate::application::{CreateMenuItem, DeleteMenuItem, GetMenuItem, ListMenuItems, UpdateMenuItem};
use crate::domain::{MenuItem, MenuItemDraft, MenuItemId};
use crate::infrastructure::http::dto::DeleteMenuItemResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 无法解析的 ID 不会匹配任何菜单项，按不存在处理
fn parse_id(raw: &str) -> Result<MenuItemId, ApiError> {
    MenuItemId::parse(raw)
        .ok_or_else(|| ApiError::NotFound(format!("Menu item not found: {}", raw)))
}

/// 获取菜单列表
pub async fn list_menu_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let items = state.list_menu_items_handler.handle(ListMenuItems)?;
    Ok(Json(items))
}

/// 获取菜单项详情
pub async fn get_menu_item(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MenuItem>, ApiError> {
    let id = parse_id(&raw_id)?;
    let item = state.get_menu_item_handler.handle(GetMenuItem { id })?;
    Ok(Json(item))
}

/// 创建菜单项
pub async fn create_menu_item(
    State(state): State<Arc<AppState>>,
    Extension(draft): Extension<MenuItemDraft>,
) -> Result<(StatusCode, Json<MenuItem>), ApiError> {
    let item = state
        .create_menu_item_handler
        .handle(CreateMenuItem { draft })?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// 整体更新菜单项，id 以路径为准
pub async fn update_menu_item(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    Extension(draft): Extension<MenuItemDraft>,
) -> Result<Json<MenuItem>, ApiError> {
    let id = parse_id(&raw_id)?;
    let item = state
        .update_menu_item_handler
        .handle(UpdateMenuItem { id, draft })?;
    Ok(Json(item))
}

/// 删除菜单项
pub async fn delete_menu_item(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteMenuItemResponse>, ApiError> {
    let id = parse_id(&raw_id)?;
    let item = state
        .delete_menu_item_handler
        .handle(DeleteMenuItem { id })?;
    Ok(Json(DeleteMenuItemResponse::new(item)))
}
