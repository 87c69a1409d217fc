//! Menu Store Port - 菜单数据的唯一读写入口
//!
//! 具体实现在 infrastructure/memory 层

use thiserror::Error;

use crate::domain::{MenuItem, MenuItemDraft, MenuItemId};

/// Menu Store 错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Menu item not found: {0}")]
    NotFound(MenuItemId),

    #[error("Menu store lock poisoned")]
    LockPoisoned,
}

/// Menu Store Port
///
/// 所有操作同步且不挂起：读取与写入之间没有让出点，
/// 单个请求内的 查找-修改 不会与其他请求交错
pub trait MenuStorePort: Send + Sync {
    /// 按插入顺序返回全部菜单项
    fn list_all(&self) -> Result<Vec<MenuItem>, StoreError>;

    /// 根据 ID 查找菜单项
    fn find_by_id(&self, id: MenuItemId) -> Result<MenuItem, StoreError>;

    /// 分配新 ID 并追加菜单项
    fn create(&self, draft: MenuItemDraft) -> Result<MenuItem, StoreError>;

    /// 整体替换除 id 外的所有字段
    fn replace(&self, id: MenuItemId, draft: MenuItemDraft) -> Result<MenuItem, StoreError>;

    /// 移除菜单项并返回被移除的值
    fn remove(&self, id: MenuItemId) -> Result<MenuItem, StoreError>;
}
