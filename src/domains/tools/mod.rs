//! Tools domain module.
//!
//! This module holds the text-transformation tools and the dispatcher that
//! routes a processing request to one of them.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Tool list and request dispatch
//! - `types.rs` - Request, response and descriptor types
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Implement `ToolDefinition` for it
//! 3. Export in `definitions/mod.rs`
//! 4. Add it to `tool_ids()`, `get_all_tools()` and `process()` in `registry.rs`
//!
//! The catalog picks new tools up from the registry on the next start.

pub mod definitions;
mod error;
mod registry;
mod types;

pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use types::{MODE_KEY, ToolDescriptor, ToolRequest, ToolResponse};
