//! In-Memory Menu Store Implementation

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::application::ports::{MenuStorePort, StoreError};
use crate::domain::{MenuItem, MenuItemDraft, MenuItemId};

use super::seed::seed_menu;

struct MenuTable {
    items: Vec<MenuItem>,
    /// 下一个待分配的 ID，只增不减，删除后不回收
    next_id: u64,
}

impl MenuTable {
    fn position(&self, id: MenuItemId) -> Result<usize, StoreError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

/// 内存菜单存储
pub struct InMemoryMenuStore {
    table: RwLock<MenuTable>,
}

impl InMemoryMenuStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self {
            table: RwLock::new(MenuTable {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// 创建并按顺序载入种子数据（ID 从 1 开始）
    pub fn with_seed() -> Self {
        Self::with_items(seed_menu())
    }

    pub fn with_items(drafts: impl IntoIterator<Item = MenuItemDraft>) -> Self {
        let mut table = MenuTable {
            items: Vec::new(),
            next_id: 1,
        };
        for draft in drafts {
            let id = MenuItemId::new(table.next_id);
            table.next_id += 1;
            table.items.push(MenuItem::from_draft(id, draft));
        }
        Self {
            table: RwLock::new(table),
        }
    }

    pub fn len(&self) -> usize {
        self.read().map(|t| t.items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MenuTable>, StoreError> {
        self.table.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MenuTable>, StoreError> {
        self.table.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for InMemoryMenuStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuStorePort for InMemoryMenuStore {
    fn list_all(&self) -> Result<Vec<MenuItem>, StoreError> {
        Ok(self.read()?.items.clone())
    }

    fn find_by_id(&self, id: MenuItemId) -> Result<MenuItem, StoreError> {
        let table = self.read()?;
        let index = table.position(id)?;
        Ok(table.items[index].clone())
    }

    fn create(&self, draft: MenuItemDraft) -> Result<MenuItem, StoreError> {
        let mut table = self.write()?;
        let id = MenuItemId::new(table.next_id);
        table.next_id += 1;

        let item = MenuItem::from_draft(id, draft);
        table.items.push(item.clone());
        tracing::debug!(item_id = %id, total = table.items.len(), "Menu item stored");
        Ok(item)
    }

    fn replace(&self, id: MenuItemId, draft: MenuItemDraft) -> Result<MenuItem, StoreError> {
        let mut table = self.write()?;
        let index = table.position(id)?;
        let item = &mut table.items[index];
        item.replace_with(draft);
        Ok(item.clone())
    }

    fn remove(&self, id: MenuItemId) -> Result<MenuItem, StoreError> {
        let mut table = self.write()?;
        let index = table.position(id)?;
        Ok(table.items.remove(index))
    }
}
