//! Request, response and descriptor types for tool processing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Settings key selecting a tool's sub-operation.
pub const MODE_KEY: &str = "mode";

/// Input for a single tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolRequest {
    /// The text to transform. May be empty.
    pub input: String,

    /// Free-form options. Only `mode` is interpreted today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Map<String, Value>>,
}

impl ToolRequest {
    /// Create a request with no settings.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            settings: None,
        }
    }

    /// Set the `mode` option.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.settings
            .get_or_insert_with(Map::new)
            .insert(MODE_KEY.to_string(), Value::String(mode.into()));
        self
    }

    /// The requested mode, if present and string-typed.
    pub fn mode(&self) -> Option<&str> {
        self.settings.as_ref()?.get(MODE_KEY)?.as_str()
    }
}

/// Result of a tool invocation.
///
/// Invalid input and unknown modes are carried in `error` rather than raised,
/// in which case `output` is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    /// The transformed text.
    pub output: String,

    /// Message describing why the input could not be processed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Reserved for per-tool extras.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl ToolResponse {
    /// Create a successful response.
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            ..Default::default()
        }
    }

    /// Create an in-payload error response.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Error response for a mode the tool does not know.
    pub fn unsupported_mode(mode: &str) -> Self {
        Self::failure(format!("Unsupported mode: {}", mode))
    }

    /// Whether this response carries an error.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl<E: std::fmt::Display> From<Result<String, E>> for ToolResponse {
    fn from(result: Result<String, E>) -> Self {
        match result {
            Ok(output) => Self::success(output),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

/// Static description of a tool, as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Identifier used in request paths.
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub icon: String,

    /// Capability tags understood by the frontend.
    pub features: Vec<String>,

    /// Accepted `mode` values, default first.
    pub modes: Vec<String>,
}
