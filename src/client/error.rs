//! 客户端错误分类，`Display` 即面向用户的提示文本

use crate::core::constant::{EMPTY_RESPONSE_ERROR, PARSE_ERROR};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Server returned error: {code}{}", reason_suffix(.reason))]
    Status { code: u16, reason: String },

    #[error("{}", EMPTY_RESPONSE_ERROR)]
    EmptyResponse,

    /// 信封中缺少 `data`，与 `success` 取值无关
    #[error("{}", PARSE_ERROR)]
    MissingData,

    /// 超时或外部取消，值为配置的超时秒数
    #[error("Request timed out after {0} seconds. Please check your connection and try again.")]
    Timeout(u64),

    #[error("Network error: {0}. Please check your connection and server availability.")]
    Network(String),

    #[error("Failed to parse server response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// 没有标准原因短语时不追加分隔空格
fn reason_suffix(reason: &str) -> String {
    if reason.is_empty() {
        String::new()
    } else {
        format!(" {}", reason)
    }
}

impl FetchError {
    /// 将 reqwest 错误归类
    pub(crate) fn from_transport(err: reqwest::Error, timeout_seconds: u64) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(timeout_seconds)
        } else if err.is_builder() {
            FetchError::Unexpected(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
