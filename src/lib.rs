//! Web Tools Server Library
//!
//! An HTTP backend serving a catalog of text-transformation tools (Base64,
//! JSON, URL, HTML entities, Unicode escapes) with a processing endpoint for
//! each.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handle and the HTTP transport
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the transforms and the processing dispatcher
//!   - **catalog**: SQLite-backed tool descriptors
//!   - **settings**: placeholder user settings
//!
//! # Example
//!
//! ```rust
//! use web_tools_server::domains::tools::{ToolRegistry, ToolRequest};
//!
//! let request = ToolRequest::new("hello").with_mode("encode");
//! let response = ToolRegistry::process("base64", &request).unwrap();
//! assert_eq!(response.output, "aGVsbG8=");
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, WebToolsServer};
