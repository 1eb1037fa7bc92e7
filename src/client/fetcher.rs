//! 产品目录获取器
//!
//! 发起一次 GET 请求，在超时或外部取消之前等待响应，
//! 并把所有失败归类为面向用户的提示文本。不做重试。

use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::error::FetchError;
use crate::config::ClientConfig;
use crate::core::{model::Product, response::ApiResponse};

pub struct CatalogFetcher {
    client: reqwest::Client,
    config: ClientConfig,
}

impl CatalogFetcher {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(format!("inventory-hub/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Unexpected(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 获取产品列表
    ///
    /// `cancel` 被触发时放弃进行中的请求，结果与超时相同。
    pub async fn fetch_products(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Product>, FetchError> {
        let url = self.config.product_list_url();
        debug!("请求产品列表: {}", url);

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FetchError::Timeout(self.config.timeout_seconds)),
            result = self.exchange(&url) => result,
        };

        match &result {
            Ok(products) => info!("获取到 {} 个产品", products.len()),
            Err(err) => warn!("获取产品列表失败: {}", err),
        }

        result
    }

    async fn exchange(&self, url: &str) -> Result<Vec<Product>, FetchError> {
        let timeout_seconds = self.config.timeout_seconds;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_transport(e, timeout_seconds))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_transport(e, timeout_seconds))?;

        decode_product_list(&body)
    }
}

/// 解码产品列表响应体
///
/// 字段名大小写不敏感。空白响应体、缺少 `data` 的信封分别给出固定的提示。
pub fn decode_product_list(body: &str) -> Result<Vec<Product>, FetchError> {
    if body.trim().is_empty() {
        return Err(FetchError::EmptyResponse);
    }

    let value: Value = serde_json::from_str(body)?;
    if value.is_null() {
        return Err(FetchError::MissingData);
    }

    let envelope: ApiResponse<Vec<Product>> = serde_json::from_value(lowercase_keys(value))?;
    envelope.data.ok_or(FetchError::MissingData)
}

/// 递归地把对象键转为小写
fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), lowercase_keys(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}
