//! # InventoryHub
//!
//! 产品目录示例应用，分为两端：
//! - 服务端：内存产品数据提供者 + `GET /api/productlist` 接口
//! - 客户端：发起请求、处理超时与取消、把失败归类为用户可读的提示
//!
//! 两端共用 [`crate::core::model`] 与 [`crate::core::response`] 中的同一份数据契约。

pub mod app;
pub mod client;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod server;

pub use app::catalog::{AppState, InMemoryProductProvider, ProductProvider, ProviderError};
pub use client::{CatalogFetcher, FetchError, LoadState};
pub use config::{load_config, ClientConfig, Config, ConfigError, CorsPolicy, ServerConfig};
pub use crate::core::model::{Category, Product};
pub use crate::core::response::ApiResponse;
