//! Application State
//!
//! 组合根持有 Store 实例，并注入到各 Command/Query Handler

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateMenuItemHandler, DeleteMenuItemHandler, UpdateMenuItemHandler,
    // Query handlers
    GetMenuItemHandler, ListMenuItemsHandler,
    // Ports
    MenuStorePort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_menu_item_handler: CreateMenuItemHandler,
    pub update_menu_item_handler: UpdateMenuItemHandler,
    pub delete_menu_item_handler: DeleteMenuItemHandler,

    // ========== Query Handlers ==========
    pub get_menu_item_handler: GetMenuItemHandler,
    pub list_menu_items_handler: ListMenuItemsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(store: Arc<dyn MenuStorePort>) -> Self {
        Self {
            // Command handlers
            create_menu_item_handler: CreateMenuItemHandler::new(store.clone()),
            update_menu_item_handler: UpdateMenuItemHandler::new(store.clone()),
            delete_menu_item_handler: DeleteMenuItemHandler::new(store.clone()),

            // Query handlers
            get_menu_item_handler: GetMenuItemHandler::new(store.clone()),
            list_menu_items_handler: ListMenuItemsHandler::new(store),
        }
    }
}
