//! Web tools server and lifecycle management.
//!
//! `WebToolsServer` ties the domains together behind one cloneable handle
//! that the HTTP layer keeps as its state:
//! - tool processing is delegated to the stateless `ToolRegistry`
//! - catalog reads go to the `CatalogStore`
//!
//! Adding a tool does not require touching this file; see `domains/tools`.

use std::sync::Arc;

use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::catalog::{CatalogResult, CatalogStore, CatalogTool};
use crate::domains::tools::{ToolError, ToolRegistry, ToolRequest, ToolResponse};

/// The application server.
#[derive(Clone)]
pub struct WebToolsServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Persisted tool catalog.
    catalog: CatalogStore,
}

impl WebToolsServer {
    /// Open the catalog database named in `config` and create the server.
    pub async fn new(config: Config) -> Result<Self> {
        let catalog = CatalogStore::connect(&config.database.path).await?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Create a server around an already opened catalog.
    pub fn with_catalog(config: Config, catalog: CatalogStore) -> Self {
        info!("Initializing {}", config.server.name);
        Self {
            config: Arc::new(config),
            catalog,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// List all catalogued tools.
    pub async fn list_tools(&self) -> CatalogResult<Vec<CatalogTool>> {
        self.catalog.list_tools().await
    }

    /// Look up one catalogued tool.
    pub async fn get_tool(&self, id: &str) -> CatalogResult<Option<CatalogTool>> {
        self.catalog.get_tool(id).await
    }

    /// Run a tool on `request`.
    #[instrument(skip(self, request))]
    pub fn process_tool(
        &self,
        tool_id: &str,
        request: &ToolRequest,
    ) -> std::result::Result<ToolResponse, ToolError> {
        ToolRegistry::process(tool_id, request)
    }

    /// Release the catalog connections.
    pub async fn shutdown(&self) {
        self.catalog.close().await;
        info!("Catalog closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_server() -> WebToolsServer {
        let catalog = CatalogStore::in_memory().await.unwrap();
        WebToolsServer::with_catalog(Config::default(), catalog)
    }

    #[tokio::test]
    async fn test_server_metadata() {
        let server = test_server().await;
        assert_eq!(server.name(), "web-tools-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_server_lists_catalog() {
        let server = test_server().await;
        assert_eq!(server.list_tools().await.unwrap().len(), 5);
        assert!(server.get_tool("json").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_server_processes_tools() {
        let server = test_server().await;
        let response = server
            .process_tool("url", &ToolRequest::new("a b"))
            .unwrap();
        assert_eq!(response.output, "a+b");
        assert!(server.process_tool("protobuf", &ToolRequest::new("")).is_err());
    }
}
