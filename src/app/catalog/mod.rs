//! 产品目录应用：数据提供者与 HTTP 处理器

pub mod handler;
pub mod service;

pub use handler::AppState;
pub use service::{InMemoryProductProvider, ProductProvider, ProviderError};
