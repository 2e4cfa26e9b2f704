//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The list of available tools (the single source of truth for the catalog)
//! - Dispatch of a processing request to the matching tool

use tracing::{instrument, warn};

use super::definitions::{Base64Tool, HtmlTool, JsonTool, ToolDefinition, UnicodeTool, UrlTool};
use super::error::ToolError;
use super::types::{ToolDescriptor, ToolRequest, ToolResponse};

/// Tool registry - knows every tool and routes requests to it.
///
/// The registry holds no state; every call is a pure function of its inputs.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool identifiers.
    pub fn tool_ids() -> Vec<&'static str> {
        vec![
            Base64Tool::ID,
            JsonTool::ID,
            UrlTool::ID,
            HtmlTool::ID,
            UnicodeTool::ID,
        ]
    }

    /// Get the catalog descriptors of all tools.
    ///
    /// This is the only place tool metadata is assembled; the catalog store
    /// seeds itself from it.
    pub fn get_all_tools() -> Vec<ToolDescriptor> {
        vec![
            Base64Tool::to_descriptor(),
            JsonTool::to_descriptor(),
            UrlTool::to_descriptor(),
            HtmlTool::to_descriptor(),
            UnicodeTool::to_descriptor(),
        ]
    }

    /// Process `request` with the tool registered under `tool_id`.
    ///
    /// Bad input and unknown modes come back as `Ok` with the response's
    /// `error` set. Only an unknown tool is an `Err`.
    #[instrument(skip(request), fields(mode = request.mode()))]
    pub fn process(tool_id: &str, request: &ToolRequest) -> Result<ToolResponse, ToolError> {
        let response = match tool_id {
            Base64Tool::ID => Base64Tool::process(request),
            JsonTool::ID => JsonTool::process(request),
            UrlTool::ID => UrlTool::process(request),
            HtmlTool::ID => HtmlTool::process(request),
            UnicodeTool::ID => UnicodeTool::process(request),
            _ => {
                warn!("Unknown tool requested: {}", tool_id);
                return Err(ToolError::unsupported(tool_id));
            }
        };

        if let Some(error) = &response.error {
            warn!("Tool {} rejected input: {}", tool_id, error);
        }

        Ok(response)
    }
}
