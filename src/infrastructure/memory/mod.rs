//! Memory Layer - In-Memory State Management
//!
//! 实现 MenuStore，进程生命周期内持有全部菜单项

mod menu_store;
mod seed;

pub use menu_store::InMemoryMenuStore;
