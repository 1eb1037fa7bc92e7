use axum::http::{header, HeaderValue, Method};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

use crate::core::constant::{DEFAULT_BASE_URL, PRODUCT_LIST_ENDPOINT, REQUEST_TIMEOUT_SECONDS};

/// 部署环境变量，用于选择跨域策略
pub const ENVIRONMENT_VAR: &str = "INVENTORY_HUB_ENV";

/// InventoryHub 配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub server: ServerConfig,
    /// 客户端配置
    pub client: ClientConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub request_timeout_seconds: u64,
    /// 跨域配置
    pub cors: CorsConfig,
}

/// 具名跨域策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorsPolicy {
    /// 任意来源、任意请求头、任意方法，仅用于开发环境
    PermissiveDev,
    /// 仅允许配置的来源，方法限 GET
    RestrictedProd,
}

/// 跨域配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub policy: CorsPolicy,
    /// `restricted-prod` 下允许的来源
    pub allowed_origins: Vec<String>,
}

/// 客户端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub endpoint: String,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志目录
    pub log_dir: PathBuf,
    /// 日志文件名前缀
    pub file_prefix: String,
    /// 是否启用控制台输出
    pub console_output: bool,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 5107,
            request_timeout_seconds: REQUEST_TIMEOUT_SECONDS,
            cors: CorsConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            policy: CorsPolicy::PermissiveDev,
            allowed_origins: Vec::new(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: PRODUCT_LIST_ENDPOINT.to_string(),
            timeout_seconds: REQUEST_TIMEOUT_SECONDS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            file_prefix: "inventory-hub".to_string(),
            console_output: true,
            level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl ClientConfig {
    /// 完整的产品列表 URL
    pub fn product_list_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl CorsConfig {
    /// 根据策略构建 tower-http 跨域层
    pub fn layer(&self) -> Result<CorsLayer, ConfigError> {
        match self.policy {
            CorsPolicy::PermissiveDev => Ok(CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)),
            CorsPolicy::RestrictedProd => Ok(CorsLayer::new()
                .allow_origin(AllowOrigin::list(self.origins()?))
                .allow_methods([Method::GET])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])),
        }
    }

    /// 解析允许的来源
    pub fn origins(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::Validation(format!("无效的跨域来源: {}", origin)))
            })
            .collect()
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// 按部署环境覆盖跨域策略
    pub fn apply_environment(&mut self, environment: Option<&str>) -> Result<(), ConfigError> {
        let Some(environment) = environment else {
            return Ok(());
        };

        self.server.cors.policy = match environment.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => CorsPolicy::RestrictedProd,
            "development" | "dev" => CorsPolicy::PermissiveDev,
            other => {
                return Err(ConfigError::Validation(format!(
                    "未知的部署环境: {}，有效值: production, development",
                    other
                )))
            }
        };

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 验证HTTP配置
        if self.server.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.server.request_timeout_seconds == 0 {
            return Err(ConfigError::Validation("服务端超时必须大于0".to_string()));
        }
        if self.server.cors.policy == CorsPolicy::RestrictedProd
            && self.server.cors.allowed_origins.is_empty()
        {
            return Err(ConfigError::Validation(
                "restricted-prod 策略至少需要一个允许的来源".to_string(),
            ));
        }
        self.server.cors.origins()?;

        // 验证客户端配置
        if self.client.base_url.is_empty() {
            return Err(ConfigError::Validation("服务地址不能为空".to_string()));
        }
        if !self.client.endpoint.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "端点路径必须以 / 开头: {}",
                self.client.endpoint
            )));
        }
        if self.client.timeout_seconds == 0 {
            return Err(ConfigError::Validation("客户端超时必须大于0".to_string()));
        }

        // 验证日志级别
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 加载、按环境覆盖并验证配置
///
/// 指定路径时只读取该文件，否则依次尝试 `config.toml`、`./config/config.toml`，
/// 都不存在则使用默认配置。
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(path) => Config::load_from_file(path)?,
        None => discover_config()?,
    };

    let environment = std::env::var(ENVIRONMENT_VAR).ok();
    config.apply_environment(environment.as_deref())?;
    config.validate()?;

    Ok(config)
}

fn discover_config() -> Result<Config, ConfigError> {
    let config_paths = ["config.toml", "./config/config.toml"];

    for path in &config_paths {
        if Path::new(path).exists() {
            info!("从配置文件加载: {}", path);
            return Config::load_from_file(path);
        }
    }

    info!("未找到配置文件，使用默认配置");
    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 5107);
        assert_eq!(config.server.cors.policy, CorsPolicy::PermissiveDev);
        assert_eq!(config.client.timeout_seconds, 30);
        assert_eq!(
            config.client.product_list_url(),
            "http://localhost:5107/api/productlist"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.client.endpoint = "api/productlist".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.server.cors.policy = CorsPolicy::RestrictedProd;
        assert!(config.validate().is_err());

        config.server.cors.allowed_origins = vec!["https://shop.example.com".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let cors = CorsConfig {
            policy: CorsPolicy::RestrictedProd,
            allowed_origins: vec!["bad\norigin".to_string()],
        };
        assert!(cors.layer().is_err());
        assert!(cors.origins().is_err());

        let mut config = Config::default();
        config.server.cors.allowed_origins = vec!["bad\norigin".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_environment_selects_policy() {
        let mut config = Config::default();

        config.apply_environment(Some("Production")).unwrap();
        assert_eq!(config.server.cors.policy, CorsPolicy::RestrictedProd);

        config.apply_environment(Some("dev")).unwrap();
        assert_eq!(config.server.cors.policy, CorsPolicy::PermissiveDev);

        config.apply_environment(None).unwrap();
        assert_eq!(config.server.cors.policy, CorsPolicy::PermissiveDev);

        assert!(config.apply_environment(Some("staging")).is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server.cors]
            policy = "restricted-prod"
            allowed_origins = ["https://shop.example.com"]

            [client]
            base_url = "http://inventory.internal/"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 5107);
        assert_eq!(config.server.cors.policy, CorsPolicy::RestrictedProd);
        assert_eq!(
            config.client.product_list_url(),
            "http://inventory.internal/api/productlist"
        );
    }

    #[test]
    fn test_config_save_load() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config").join("config.toml");

        let mut config = Config::default();
        config.server.port = 8088;
        config.save_to_file(&config_path).unwrap();

        let loaded_config = load_config(Some(&config_path)).unwrap();
        assert_eq!(loaded_config.server.port, 8088);
        assert_eq!(loaded_config.client.base_url, config.client.base_url);
    }
}
