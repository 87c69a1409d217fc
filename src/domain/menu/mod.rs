//! Menu Context - 菜单限界上下文
//!
//! 职责:
//! - 菜单项实体与已校验载荷
//! - 分类枚举与 ID 值对象
//! - 载荷校验规则

mod entities;
mod errors;
pub mod validation;
mod value_objects;

pub use entities::{MenuItem, MenuItemDraft};
pub use errors::MenuError;
pub use validation::validate_menu_payload;
pub use value_objects::{Category, MenuItemId};
