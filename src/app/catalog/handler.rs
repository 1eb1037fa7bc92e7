//! 产品目录处理器

use std::sync::Arc;

use axum::{extract::State, response::Json};
use tracing::info;

use super::service::ProductProvider;
use crate::core::{
    constant::PRODUCTS_RETRIEVED_MESSAGE, error::CoreError, model::Product,
    response::ApiResponse,
};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ProductProvider>,
}

impl AppState {
    pub fn new(provider: impl ProductProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }
}

/// GET /api/productlist
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Product>>>, CoreError> {
    let products = state.provider.list_all().await?;
    info!("返回产品列表，共 {} 个产品", products.len());
    Ok(Json(ApiResponse::success(
        products,
        PRODUCTS_RETRIEVED_MESSAGE,
    )))
}
