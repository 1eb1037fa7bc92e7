//! HTTP 服务器：路由、中间件与启动

use axum::{middleware, response::Json, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use crate::app::catalog::{handler, AppState};
use crate::config::{ConfigError, ServerConfig};
use crate::core::{
    constant::{HEALTH_ENDPOINT, PRODUCT_LIST_ENDPOINT},
    error::CoreError,
    middleware::request_logging_middleware,
};

/// 构建应用路由
pub fn build_router(state: AppState, config: &ServerConfig) -> Result<Router, ConfigError> {
    let cors = config.cors.layer()?;

    Ok(Router::new()
        .route(PRODUCT_LIST_ENDPOINT, get(handler::list_products))
        .route(HEALTH_ENDPOINT, get(health_check))
        .fallback(not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout()))
        .with_state(state))
}

/// 绑定地址并运行服务器，直到收到 Ctrl-C
pub async fn run(state: AppState, config: &ServerConfig) -> anyhow::Result<()> {
    let app = build_router(state, config)?;
    let listener = TcpListener::bind(config.address()).await?;

    info!("🚀 InventoryHub 服务器运行在 http://{}", listener.local_addr()?);
    info!("📖 API 端点:");
    info!("   GET {} - 获取产品列表", PRODUCT_LIST_ENDPOINT);
    info!("   GET {} - 健康检查", HEALTH_ENDPOINT);
    info!("🌐 跨域策略: {:?}", config.cors.policy);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("收到 Ctrl-C，正在关闭服务器...");
    }
}

/// 健康检查
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found(uri: axum::http::Uri) -> CoreError {
    CoreError::NotFound(format!("Resource not found: {}", uri.path()))
}
