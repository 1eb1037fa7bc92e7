//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::response::ApiResponse;
use crate::app::catalog::service::ProviderError;

/// 服务端错误类型，统一转换为 `success=false` 的响应信封
#[derive(Debug)]
pub enum CoreError {
    NotFound(String),
    InternalServerError(String),
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            CoreError::InternalServerError(msg) => {
                error!("内部错误: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ApiResponse::<()>::failure(message))).into_response()
    }
}

impl From<ProviderError> for CoreError {
    fn from(err: ProviderError) -> Self {
        CoreError::InternalServerError(format!(
            "{}: {}",
            super::constant::PRODUCTS_UNAVAILABLE_MESSAGE,
            err
        ))
    }
}
