//! Tool definitions module.
//!
//! Each tool is defined in its own file and implements [`ToolDefinition`].
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `my_tool.rs`)
//! 2. Implement the `ToolDefinition` trait
//! 3. Export it here
//! 4. Register it in `registry.rs`

pub mod base64;
pub mod html;
pub mod json;
pub mod unicode;
pub mod url;

pub use self::base64::Base64Tool;
pub use self::html::HtmlTool;
pub use self::json::JsonTool;
pub use self::unicode::UnicodeTool;
pub use self::url::UrlTool;

use super::types::{ToolDescriptor, ToolRequest, ToolResponse};

/// Trait for tool definitions.
///
/// The associated constants are the tool's catalog entry; `execute` is the
/// transform itself.
pub trait ToolDefinition {
    /// Identifier used in `/api/tools/{id}` paths.
    const ID: &'static str;

    /// Display name.
    const NAME: &'static str;

    /// Short description shown in the catalog.
    const DESCRIPTION: &'static str;

    /// Catalog category (`encoding`, `formatting`, ...).
    const CATEGORY: &'static str;

    /// Icon name used by the frontend.
    const ICON: &'static str;

    /// Capability tags.
    const FEATURES: &'static [&'static str];

    /// Accepted modes. The first one is the default.
    const MODES: &'static [&'static str];

    /// Run the transform for an already resolved mode.
    fn execute(input: &str, mode: &str) -> ToolResponse;

    /// Mode used when the request does not name one.
    fn default_mode() -> &'static str {
        Self::MODES.first().copied().unwrap_or_default()
    }

    /// Resolve the mode from the request settings and run the transform.
    fn process(request: &ToolRequest) -> ToolResponse {
        let mode = request.mode().unwrap_or_else(|| Self::default_mode());
        Self::execute(&request.input, mode)
    }

    /// Build the catalog descriptor for this tool.
    fn to_descriptor() -> ToolDescriptor {
        ToolDescriptor {
            id: Self::ID.to_string(),
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            category: Self::CATEGORY.to_string(),
            icon: Self::ICON.to_string(),
            features: Self::FEATURES.iter().map(|f| f.to_string()).collect(),
            modes: Self::MODES.iter().map(|m| m.to_string()).collect(),
        }
    }
}
