//! Catalog domain module.
//!
//! Persists the tool descriptors in SQLite so the listing endpoints read
//! from a store rather than from code. The tool registry is the only source
//! of catalog entries; the store bootstraps its schema and seeds itself from
//! it when opened.
//!
//! - `store.rs` - `CatalogStore` (schema, seeding, queries)
//! - `error.rs` - Catalog-specific error types

mod error;
mod store;

pub use error::{CatalogError, CatalogResult};
pub use store::{CatalogStore, CatalogTool};
