//! Menu Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::MenuStorePort;
use crate::application::queries::{GetMenuItem, ListMenuItems};
use crate::domain::MenuItem;

/// GetMenuItem Handler
pub struct GetMenuItemHandler {
    store: Arc<dyn MenuStorePort>,
}

impl GetMenuItemHandler {
    pub fn new(store: Arc<dyn MenuStorePort>) -> Self {
        Self { store }
    }

    pub fn handle(&self, query: GetMenuItem) -> Result<MenuItem, ApplicationError> {
        Ok(self.store.find_by_id(query.id)?)
    }
}

/// ListMenuItems Handler
pub struct ListMenuItemsHandler {
    store: Arc<dyn MenuStorePort>,
}

impl ListMenuItemsHandler {
    pub fn new(store: Arc<dyn MenuStorePort>) -> Self {
        Self { store }
    }

    pub fn handle(&self, _query: ListMenuItems) -> Result<Vec<MenuItem>, ApplicationError> {
        Ok(self.store.list_all()?)
    }
}
