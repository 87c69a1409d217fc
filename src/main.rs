//! Menu API - 餐厅菜单 CRUD 服务

use std::sync::Arc;

use menu_api::application::MenuStorePort;
use menu_api::config::{load_config, print_config, LogConfig};
use menu_api::infrastructure::http::{AppState, HttpServer};
use menu_api::infrastructure::InMemoryMenuStore;
use tracing_subscriber::EnvFilter;

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},menu_api={}", log.level, log.level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Menu API - 餐厅菜单服务");
    print_config(&config);

    // 进程生命周期内的菜单存储
    let store = if config.menu.seed {
        InMemoryMenuStore::with_seed()
    } else {
        InMemoryMenuStore::new()
    };
    tracing::info!(items = store.len(), "Menu store initialized");

    let store: Arc<dyn MenuStorePort> = Arc::new(store);
    let state = AppState::new(store);
    let server = HttpServer::new(config.server.clone(), state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
