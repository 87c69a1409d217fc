//! Menu API - 餐厅菜单 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Menu Context: 菜单项、分类、校验规则
//!
//! 应用层 (application/):
//! - Ports: MenuStore 端口定义
//! - Commands: 创建/更新/删除
//! - Queries: 列表/详情
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 请求管线中间件
//! - Memory: MenuStore 内存实现与种子数据

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
