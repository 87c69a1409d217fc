//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod menu_store;

pub use menu_store::{MenuStorePort, StoreError};
