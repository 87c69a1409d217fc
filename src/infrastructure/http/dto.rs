//! Data Transfer Objects

use serde::Serialize;

use crate::domain::MenuItem;

pub const DELETED_MESSAGE: &str = "Menu Item Deleted Successfully";

/// 删除菜单项响应
#[derive(Debug, Serialize)]
pub struct DeleteMenuItemResponse {
    pub message: &'static str,
    #[serde(rename = "deletedItem")]
    pub deleted_item: MenuItem,
}

impl DeleteMenuItemResponse {
    pub fn new(deleted_item: MenuItem) -> Self {
        Self {
            message: DELETED_MESSAGE,
            deleted_item,
        }
    }
}

/// Ping 响应
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}
