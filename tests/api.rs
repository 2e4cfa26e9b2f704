use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;

use web_tools_server::core::{Config, WebToolsServer, transport::build_router};
use web_tools_server::domains::catalog::CatalogStore;

async fn app() -> Router {
    let mut config = Config::default();
    config.assets.dir = "./no-frontend-in-tests".into();
    let catalog = CatalogStore::in_memory().await.unwrap();
    build_router(WebToolsServer::with_catalog(config, catalog))
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_version() {
    let (status, body) = send(app().await, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn lists_all_tools_in_id_order() {
    let (status, body) = send(app().await, get("/api/tools")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["base64", "html", "json", "unicode", "url"]);
}

#[tokio::test]
async fn get_tool_returns_descriptor() {
    let (status, body) = send(app().await, get("/api/tools/base64")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "base64");
    assert_eq!(body["category"], "encoding");
    assert!(body["features"].is_array());
    assert!(body["modes"].as_array().unwrap().contains(&json!("decode")));
}

#[tokio::test]
async fn get_unknown_tool_is_not_found() {
    let (status, body) = send(app().await, get("/api/tools/protobuf")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["error"], "Tool not found");
}

#[tokio::test]
async fn process_uses_default_mode() {
    let req = post_json("/api/tools/base64/process", json!({ "input": "hello" }));
    let (status, body) = send(app().await, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "output": "aGVsbG8=" }));
}

#[tokio::test]
async fn process_honors_mode_setting() {
    let req = post_json(
        "/api/tools/base64/process",
        json!({ "input": "aGVsbG8=", "settings": { "mode": "decode" } }),
    );
    let (status, body) = send(app().await, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], "hello");
}

#[tokio::test]
async fn invalid_input_is_reported_in_payload() {
    let req = post_json(
        "/api/tools/json/process",
        json!({ "input": "{not json", "settings": { "mode": "format" } }),
    );
    let (status, body) = send(app().await, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], "");
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
}

#[tokio::test]
async fn unknown_mode_is_reported_in_payload() {
    let req = post_json(
        "/api/tools/url/process",
        json!({ "input": "x", "settings": { "mode": "rot13" } }),
    );
    let (status, body) = send(app().await, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "Unsupported mode: rot13");
}

#[tokio::test]
async fn process_unknown_tool_is_not_found() {
    let req = post_json("/api/tools/protobuf/process", json!({ "input": "x" }));
    let (status, body) = send(app().await, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "UNSUPPORTED_TOOL");
    assert_eq!(body["error"], "Unsupported tool: protobuf");
}

#[tokio::test]
async fn process_without_input_is_bad_request() {
    let req = post_json("/api/tools/base64/process", json!({ "settings": {} }));
    let (status, body) = send(app().await, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_REQUEST");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn process_with_malformed_body_is_bad_request() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/tools/base64/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"input\":"))
        .unwrap();
    let (status, body) = send(app().await, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn request_id_is_echoed() {
    let req = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let resp = app().await.oneshot(req).await.unwrap();
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "abc-123");
}

#[tokio::test]
async fn request_id_is_generated() {
    let resp = app().await.oneshot(get("/health")).await.unwrap();
    let id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(!id.is_empty());
}

#[tokio::test]
async fn cors_preflight_allows_dev_frontend() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/tools/json/process")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let resp = app().await.oneshot(req).await.unwrap();
    assert!(resp.status().is_success());
    let headers = resp.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
    let allow_methods = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(allow_methods.contains("POST"));
}

#[tokio::test]
async fn cors_ignores_unknown_origin() {
    let req = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let resp = app().await.oneshot(req).await.unwrap();
    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn settings_defaults() {
    let (status, body) = send(app().await, get("/api/settings")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["theme"], "light");
    assert_eq!(body["autoSave"], true);
}

#[tokio::test]
async fn settings_update_is_acknowledged() {
    let req = post_json("/api/settings", json!({ "theme": "dark" }));
    let (status, body) = send(app().await, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Settings updated successfully");
}

#[tokio::test]
async fn settings_update_requires_object() {
    let req = post_json("/api/settings", json!(["theme", "dark"]));
    let (status, body) = send(app().await, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_REQUEST");
}
