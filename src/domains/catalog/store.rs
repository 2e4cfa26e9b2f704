//! SQLite-backed tool catalog.
//!
//! The schema is bootstrapped on open and missing tools are seeded from
//! [`ToolRegistry::get_all_tools`]. Rows already present are left as they are.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{info, instrument};

use super::error::{CatalogError, CatalogResult};
use crate::domains::tools::{ToolDescriptor, ToolRegistry};

const CREATE_TOOLS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tools (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT,
    category TEXT NOT NULL,
    icon TEXT,
    features TEXT,
    modes TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)"#;

const SELECT_TOOLS: &str = "SELECT id, name, description, category, icon, features, modes, \
     created_at, updated_at FROM tools";

/// A catalog entry as stored in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogTool {
    #[serde(flatten)]
    pub descriptor: ToolDescriptor,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, FromRow)]
struct ToolRow {
    id: String,
    name: String,
    description: Option<String>,
    category: String,
    icon: Option<String>,
    features: Option<String>,
    modes: Option<String>,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl TryFrom<ToolRow> for CatalogTool {
    type Error = CatalogError;

    fn try_from(row: ToolRow) -> CatalogResult<Self> {
        let features = parse_list(&row.id, row.features.as_deref())?;
        let modes = parse_list(&row.id, row.modes.as_deref())?;
        Ok(Self {
            descriptor: ToolDescriptor {
                id: row.id,
                name: row.name,
                description: row.description.unwrap_or_default(),
                category: row.category,
                icon: row.icon.unwrap_or_default(),
                features,
                modes,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn parse_list(id: &str, column: Option<&str>) -> CatalogResult<Vec<String>> {
    match column {
        None => Ok(Vec::new()),
        Some(text) => serde_json::from_str(text).map_err(|e| CatalogError::corrupt_row(id, e)),
    }
}

/// Handle to the tool catalog database.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    pool: SqlitePool,
}

impl CatalogStore {
    /// Open (creating if needed) the database at `path`, then bootstrap and seed it.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub async fn connect(path: &Path) -> CatalogResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        let store = Self { pool };
        store.initialize().await?;
        info!("Catalog database ready at {}", path.display());
        Ok(store)
    }

    /// Open a private in-memory catalog.
    pub async fn in_memory() -> CatalogResult<Self> {
        // Each in-memory connection is its own database, so keep exactly one alive.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }

    async fn initialize(&self) -> CatalogResult<()> {
        sqlx::query(CREATE_TOOLS_TABLE).execute(&self.pool).await?;
        let inserted = self.seed(&ToolRegistry::get_all_tools()).await?;
        info!("Catalog seeded ({} new tools)", inserted);
        Ok(())
    }

    /// Insert descriptors that are not stored yet. Returns how many were added.
    pub async fn seed(&self, tools: &[ToolDescriptor]) -> CatalogResult<u64> {
        let mut inserted = 0;
        for tool in tools {
            let result = sqlx::query(
                "INSERT OR IGNORE INTO tools (id, name, description, category, icon, features, modes) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )
            .bind(&tool.id)
            .bind(&tool.name)
            .bind(&tool.description)
            .bind(&tool.category)
            .bind(&tool.icon)
            .bind(serde_json::to_string(&tool.features)?)
            .bind(serde_json::to_string(&tool.modes)?)
            .execute(&self.pool)
            .await?;
            inserted += result.rows_affected();
        }
        Ok(inserted)
    }

    /// All stored tools, ordered by id.
    pub async fn list_tools(&self) -> CatalogResult<Vec<CatalogTool>> {
        let rows: Vec<ToolRow> = sqlx::query_as(&format!("{} ORDER BY id", SELECT_TOOLS))
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(CatalogTool::try_from).collect()
    }

    /// A single tool, or `None` if no row has that id.
    pub async fn get_tool(&self, id: &str) -> CatalogResult<Option<CatalogTool>> {
        let row: Option<ToolRow> = sqlx::query_as(&format!("{} WHERE id = ?1", SELECT_TOOLS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(CatalogTool::try_from).transpose()
    }

    /// Close the underlying pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_in_memory_seeds_all_tools() {
        let store = CatalogStore::in_memory().await.unwrap();
        let tools = store.list_tools().await.unwrap();
        let ids: Vec<_> = tools.iter().map(|t| t.descriptor.id.as_str()).collect();
        assert_eq!(ids, vec!["base64", "html", "json", "unicode", "url"]);
    }

    #[tokio::test]
    async fn test_stored_descriptor_matches_registry() {
        let store = CatalogStore::in_memory().await.unwrap();
        for descriptor in ToolRegistry::get_all_tools() {
            let stored = store.get_tool(&descriptor.id).await.unwrap().unwrap();
            assert_eq!(stored.descriptor, descriptor);
        }
    }

    #[tokio::test]
    async fn test_get_missing_tool() {
        let store = CatalogStore::in_memory().await.unwrap();
        assert!(store.get_tool("protobuf").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = CatalogStore::in_memory().await.unwrap();
        let inserted = store.seed(&ToolRegistry::get_all_tools()).await.unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(store.list_tools().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_connect_creates_database_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("web-tools.db");

        let store = CatalogStore::connect(&path).await.unwrap();
        assert!(path.exists());
        assert_eq!(store.list_tools().await.unwrap().len(), 5);
        store.close().await;

        // Reopening keeps a single row per tool.
        let store = CatalogStore::connect(&path).await.unwrap();
        assert_eq!(store.list_tools().await.unwrap().len(), 5);
        store.close().await;
    }

    #[tokio::test]
    async fn test_corrupt_features_column() {
        let store = CatalogStore::in_memory().await.unwrap();
        sqlx::query("UPDATE tools SET features = 'not json' WHERE id = 'url'")
            .execute(&store.pool)
            .await
            .unwrap();

        let err = store.get_tool("url").await.unwrap_err();
        assert!(matches!(err, CatalogError::CorruptRow { ref id, .. } if id == "url"));
    }

    #[test]
    fn test_catalog_tool_serializes_flat() {
        let descriptor = ToolRegistry::get_all_tools().remove(0);
        let timestamp = NaiveDateTime::parse_from_str("2024-01-01 00:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        let tool = CatalogTool {
            descriptor,
            created_at: timestamp,
            updated_at: timestamp,
        };
        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(value["id"], "base64");
        assert_eq!(value["features"][0], "input-validation");
        assert!(value.get("descriptor").is_none());
        assert!(value.get("created_at").is_some());
    }
}
