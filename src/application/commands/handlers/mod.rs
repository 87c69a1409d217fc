//! Command Handlers 实现

mod menu_handlers;

pub use menu_handlers::*;
