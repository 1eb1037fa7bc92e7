use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use inventory_hub::{
    config::CorsPolicy, server::build_router, AppState, InMemoryProductProvider, Product,
    ProductProvider, ProviderError, ServerConfig,
};
use serde_json::Value;
use tower::ServiceExt;

struct FailingProvider;

#[async_trait]
impl ProductProvider for FailingProvider {
    async fn list_all(&self) -> Result<Vec<Product>, ProviderError> {
        Err(ProviderError::Unavailable("connection reset".to_string()))
    }
}

fn router_with(provider: impl ProductProvider + 'static, config: &ServerConfig) -> Router {
    build_router(AppState::new(provider), config).unwrap()
}

async fn get(router: Router, uri: &str, origin: Option<&str>) -> (StatusCode, axum::http::HeaderMap, Value) {
    let mut request = Request::builder().uri(uri);
    if let Some(origin) = origin {
        request = request.header(header::ORIGIN, origin);
    }
    let response = router
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, headers, json)
}

#[tokio::test]
async fn test_product_list_envelope() {
    let router = router_with(InMemoryProductProvider::new(), &ServerConfig::default());

    let (status, _, json) = get(router, "/api/productlist", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Products retrieved successfully");
    assert!(json["timestamp"].is_string());

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 4);
    assert_eq!(data[0]["id"], 1);
    assert_eq!(data[0]["name"], "Laptop");
    assert_eq!(data[0]["price"], 1200.5);
    assert_eq!(data[2]["price"], 25.99);
    assert_eq!(data[3]["category"]["name"], "Furniture");
    assert_eq!(data[3]["stock"], 15);
}

#[tokio::test]
async fn test_permissive_cors_allows_any_origin() {
    let router = router_with(InMemoryProductProvider::new(), &ServerConfig::default());

    let (status, headers, _) = get(router, "/api/productlist", Some("http://localhost:5000")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_restricted_cors_only_allows_listed_origins() {
    let mut config = ServerConfig::default();
    config.cors.policy = CorsPolicy::RestrictedProd;
    config.cors.allowed_origins = vec!["https://shop.example.com".to_string()];

    let (_, headers, _) = get(
        router_with(InMemoryProductProvider::new(), &config),
        "/api/productlist",
        Some("https://shop.example.com"),
    )
    .await;
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://shop.example.com"
    );

    let (_, headers, _) = get(
        router_with(InMemoryProductProvider::new(), &config),
        "/api/productlist",
        Some("https://evil.example.com"),
    )
    .await;
    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_preflight_request() {
    let router = router_with(InMemoryProductProvider::new(), &ServerConfig::default());

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/productlist")
                .header(header::ORIGIN, "http://localhost:5000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_provider_failure_returns_failure_envelope() {
    let router = router_with(FailingProvider, &ServerConfig::default());

    let (status, _, json) = get(router, "/api/productlist", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert!(json["data"].is_null());
    assert!(json["message"]
        .as_str()
        .unwrap()
        .starts_with("Failed to retrieve products"));
}

#[tokio::test]
async fn test_unknown_path_returns_not_found_envelope() {
    let router = router_with(InMemoryProductProvider::new(), &ServerConfig::default());

    let (status, _, json) = get(router, "/api/unknown", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Resource not found: /api/unknown");
}

#[tokio::test]
async fn test_health_check() {
    let router = router_with(InMemoryProductProvider::new(), &ServerConfig::default());

    let (status, _, json) = get(router, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}
