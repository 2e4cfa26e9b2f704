//! Catalog-specific error types.

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while opening, seeding or reading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The database could not be reached or a query failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The database directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored column did not hold the expected JSON list.
    #[error("Corrupt catalog row '{id}': {source}")]
    CorruptRow {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing a descriptor for storage failed.
    #[error("Failed to encode catalog entry: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CatalogError {
    /// Create a corrupt-row error.
    pub fn corrupt_row(id: impl Into<String>, source: serde_json::Error) -> Self {
        Self::CorruptRow {
            id: id.into(),
            source,
        }
    }
}
