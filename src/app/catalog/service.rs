//! 产品目录业务服务

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::dec;
use tracing::debug;

use crate::core::model::{Category, Product};

/// 模拟数据源访问的延迟
const SIMULATED_LATENCY: Duration = Duration::from_millis(10);

/// 数据提供者错误
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("数据源不可用: {0}")]
    Unavailable(String),
}

/// 只读产品数据源
///
/// 与具体存储无关，持久化实现可以直接替换内存实现，
/// 处理器和客户端无需改动。
#[async_trait]
pub trait ProductProvider: Send + Sync {
    /// 按插入顺序返回全部产品
    async fn list_all(&self) -> Result<Vec<Product>, ProviderError>;
}

/// 进程启动时构建、此后不再变化的内存产品列表
#[derive(Debug, Clone)]
pub struct InMemoryProductProvider {
    products: Vec<Product>,
}

impl InMemoryProductProvider {
    pub fn new() -> Self {
        Self::with_products(sample_products())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl Default for InMemoryProductProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductProvider for InMemoryProductProvider {
    async fn list_all(&self) -> Result<Vec<Product>, ProviderError> {
        // 模拟异步数据库访问
        tokio::time::sleep(SIMULATED_LATENCY).await;
        debug!("读取内存产品列表，共 {} 个产品", self.products.len());
        Ok(self.products.clone())
    }
}

/// 示例产品数据
pub fn sample_products() -> Vec<Product> {
    let electronics = Category::new(1, "Electronics");
    let furniture = Category::new(2, "Furniture");

    vec![
        Product::new(1, "Laptop", dec!(1200.50), 25, electronics.clone()),
        Product::new(2, "Headphones", dec!(50.00), 100, electronics.clone()),
        Product::new(3, "Wireless Mouse", dec!(25.99), 75, electronics),
        Product::new(4, "Office Chair", dec!(199.99), 15, furniture),
    ]
}
