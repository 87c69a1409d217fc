//! Menu Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateMenuItem, DeleteMenuItem, UpdateMenuItem};
use crate::application::error::ApplicationError;
use crate::application::ports::MenuStorePort;
use crate::domain::MenuItem;

// ============================================================================
// CreateMenuItem
// ============================================================================

/// CreateMenuItem Handler
pub struct CreateMenuItemHandler {
    store: Arc<dyn MenuStorePort>,
}

impl CreateMenuItemHandler {
    pub fn new(store: Arc<dyn MenuStorePort>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: CreateMenuItem) -> Result<MenuItem, ApplicationError> {
        let item = self.store.create(command.draft)?;

        tracing::info!(
            item_id = %item.id,
            name = %item.name,
            category = %item.category,
            "Menu item created"
        );

        Ok(item)
    }
}

// ============================================================================
// UpdateMenuItem
// ============================================================================

/// UpdateMenuItem Handler
pub struct UpdateMenuItemHandler {
    store: Arc<dyn MenuStorePort>,
}

impl UpdateMenuItemHandler {
    pub fn new(store: Arc<dyn MenuStorePort>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: UpdateMenuItem) -> Result<MenuItem, ApplicationError> {
        let item = self.store.replace(command.id, command.draft)?;

        tracing::info!(item_id = %item.id, name = %item.name, "Menu item updated");

        Ok(item)
    }
}

// ============================================================================
// DeleteMenuItem
// ============================================================================

/// DeleteMenuItem Handler
pub struct DeleteMenuItemHandler {
    store: Arc<dyn MenuStorePort>,
}

impl DeleteMenuItemHandler {
    pub fn new(store: Arc<dyn MenuStorePort>) -> Self {
        Self { store }
    }

    /// 删除并返回被移除的菜单项
    pub fn handle(&self, command: DeleteMenuItem) -> Result<MenuItem, ApplicationError> {
        let item = self.store.remove(command.id)?;

        tracing::info!(item_id = %item.id, name = %item.name, "Menu item deleted");

        Ok(item)
    }
}
