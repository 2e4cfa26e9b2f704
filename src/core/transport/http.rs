//! HTTP transport implementation.
//!
//! REST API over axum:
//! - `GET  /health`
//! - `GET  /api/tools`, `GET /api/tools/{tool_id}`
//! - `POST /api/tools/{tool_id}/process`
//! - `GET  /api/settings`, `POST /api/settings`
//! - static frontend files under `/assets` and `/`

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig, middleware};
use crate::core::WebToolsServer;
use crate::domains::catalog::{CatalogError, CatalogTool};
use crate::domains::settings::{self, SettingsUpdate};
use crate::domains::tools::{ToolError, ToolRequest, ToolResponse};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Error body for requests that fail at the transport level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A failed request: status code plus [`ErrorBody`].
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    /// Create an error response.
    pub fn new(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: message.into(),
                code: Some(code.to_string()),
                details: None,
            },
        }
    }

    /// Attach details to the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.body.details = Some(details.into());
        self
    }

    /// Malformed request body.
    pub fn invalid_request(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST", "Invalid request body")
            .with_details(rejection.body_text())
    }

    /// Unknown catalog entry.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    /// Internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }

    /// The HTTP status of this error.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ToolError> for ApiError {
    fn from(e: ToolError) -> Self {
        match e {
            ToolError::Unsupported(_) => {
                Self::new(StatusCode::NOT_FOUND, "UNSUPPORTED_TOOL", e.to_string())
            }
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        error!("Catalog failure: {}", e);
        Self::internal("Failed to retrieve tools")
    }
}

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, server: WebToolsServer) -> TransportResult<()> {
        let addr = self.address();
        info!("Starting transport: {}", self.config.description());

        let app = build_router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {}", addr);
        info!("  → Tools:    GET /api/tools, POST /api/tools/{{id}}/process");
        info!("  → Settings: GET|POST /api/settings");
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the application router for `server`.
///
/// Middleware and static file serving follow the server's configuration.
pub fn build_router(server: WebToolsServer) -> Router {
    let config = server.config().clone();

    let api = Router::new()
        .route("/health", get(health_check))
        .route("/api/tools", get(list_tools))
        .route("/api/tools/{tool_id}", get(get_tool))
        .route("/api/tools/{tool_id}/process", post(process_tool))
        .route("/api/settings", get(get_settings).post(update_settings))
        .with_state(server);

    let app = with_static_assets(api, &config.assets.dir);
    let mut app = middleware::with_request_tracing(app);

    if config.http.cors.enabled {
        app = app.layer(middleware::cors_layer(&config.http.cors));
    }

    app
}

/// Serve the built frontend, if present.
fn with_static_assets(router: Router, dir: &std::path::Path) -> Router {
    let index = dir.join("index.html");
    if !index.is_file() {
        warn!("No frontend found at {} - static serving disabled", dir.display());
        return router;
    }

    info!("Serving frontend from {}", dir.display());
    router
        .nest_service("/assets", ServeDir::new(dir.join("assets")))
        .route_service("/", ServeFile::new(index))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Health check endpoint.
async fn health_check(State(server): State<WebToolsServer>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: server.version().to_string(),
    })
}

/// List the tool catalog.
async fn list_tools(
    State(server): State<WebToolsServer>,
) -> Result<Json<Vec<CatalogTool>>, ApiError> {
    let tools = server.list_tools().await?;
    Ok(Json(tools))
}

/// Get one catalog entry.
#[instrument(skip(server))]
async fn get_tool(
    State(server): State<WebToolsServer>,
    Path(tool_id): Path<String>,
) -> Result<Json<CatalogTool>, ApiError> {
    match server.get_tool(&tool_id).await? {
        Some(tool) => Ok(Json(tool)),
        None => {
            warn!("Tool not found: {}", tool_id);
            Err(ApiError::not_found("Tool not found"))
        }
    }
}

/// Run a tool on the request body.
///
/// In-payload errors (bad input, unknown mode) still answer 200.
#[instrument(skip(server, payload))]
async fn process_tool(
    State(server): State<WebToolsServer>,
    Path(tool_id): Path<String>,
    payload: Result<Json<ToolRequest>, JsonRejection>,
) -> Result<Json<ToolResponse>, ApiError> {
    let Json(request) = payload.map_err(ApiError::invalid_request)?;
    info!("Processing {} bytes", request.input.len());

    let response = server.process_tool(&tool_id, &request)?;
    Ok(Json(response))
}

/// Current settings (defaults until persistence exists).
async fn get_settings() -> Json<Map<String, Value>> {
    Json(settings::default_settings())
}

/// Accept a settings update.
async fn update_settings(
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<SettingsUpdate>, ApiError> {
    let Json(update) = payload.map_err(ApiError::invalid_request)?;
    Ok(Json(settings::update_settings(&update)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_tool_maps_to_not_found() {
        let error = ApiError::from(ToolError::unsupported("nope"));
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.body.code.as_deref(), Some("UNSUPPORTED_TOOL"));
        assert_eq!(error.body.error, "Unsupported tool: nope");
    }

    #[test]
    fn test_error_body_omits_empty_fields() {
        let error = ApiError::not_found("Tool not found");
        let value = serde_json::to_value(&error.body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "error": "Tool not found", "code": "NOT_FOUND" })
        );
    }
}
