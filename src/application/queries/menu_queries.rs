//! Menu Queries

use crate::domain::MenuItemId;

/// 获取菜单项详情查询
#[derive(Debug, Clone)]
pub struct GetMenuItem {
    pub id: MenuItemId,
}

/// 列出所有菜单项查询
#[derive(Debug, Clone)]
pub struct ListMenuItems;
