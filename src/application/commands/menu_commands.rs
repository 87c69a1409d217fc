//! Menu Commands

use crate::domain::{MenuItemDraft, MenuItemId};

/// 创建菜单项命令
#[derive(Debug, Clone)]
pub struct CreateMenuItem {
    pub draft: MenuItemDraft,
}

/// 更新菜单项命令（id 以路径参数为准）
#[derive(Debug, Clone)]
pub struct UpdateMenuItem {
    pub id: MenuItemId,
    pub draft: MenuItemDraft,
}

/// 删除菜单项命令
#[derive(Debug, Clone)]
pub struct DeleteMenuItem {
    pub id: MenuItemId,
}
