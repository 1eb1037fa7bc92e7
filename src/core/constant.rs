//! 集中管理的配置常量与面向用户的提示文本

// API 端点
pub const DEFAULT_BASE_URL: &str = "http://localhost:5107";
pub const PRODUCT_LIST_ENDPOINT: &str = "/api/productlist";
pub const HEALTH_ENDPOINT: &str = "/health";

// 超时
pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

// 服务端响应文本
pub const PRODUCTS_RETRIEVED_MESSAGE: &str = "Products retrieved successfully";
pub const PRODUCTS_UNAVAILABLE_MESSAGE: &str = "Failed to retrieve products";

// 界面文本
pub const LOADING_MESSAGE: &str = "Loading products...";
pub const NO_DATA_MESSAGE: &str = "No products found.";

// 客户端错误文本
pub const EMPTY_RESPONSE_ERROR: &str = "Received empty response from server.";
pub const PARSE_ERROR: &str = "Failed to parse product data from server response.";
