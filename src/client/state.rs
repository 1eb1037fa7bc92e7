//! 渲染层使用的加载状态

use crate::core::model::Product;

use super::error::FetchError;

/// 渲染层消费的三态结果
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<Product>),
    Failed(String),
}

impl From<Result<Vec<Product>, FetchError>> for LoadState {
    fn from(result: Result<Vec<Product>, FetchError>) -> Self {
        match result {
            Ok(products) => LoadState::Loaded(products),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        assert_eq!(LoadState::from(Ok(Vec::new())), LoadState::Loaded(Vec::new()));
        assert_eq!(
            LoadState::from(Err(FetchError::EmptyResponse)),
            LoadState::Failed("Received empty response from server.".to_string())
        );
    }
}
