//! Domain Layer - 领域层
//!
//! 单一限界上下文:
//! - Menu Context: 菜单管理

pub mod menu;

pub use menu::{validate_menu_payload, Category, MenuError, MenuItem, MenuItemDraft, MenuItemId};
