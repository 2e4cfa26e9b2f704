//! Tool-specific error types.

use thiserror::Error;

/// Errors raised by the tool dispatcher.
///
/// Bad input and unknown modes are not errors at this level; they are
/// reported inside [`ToolResponse`](super::ToolResponse).
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool is registered under the requested identifier.
    #[error("Unsupported tool: {0}")]
    Unsupported(String),
}

impl ToolError {
    /// Create a new "unsupported tool" error.
    pub fn unsupported(id: impl Into<String>) -> Self {
        Self::Unsupported(id.into())
    }
}
