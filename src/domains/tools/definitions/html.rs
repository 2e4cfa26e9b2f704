//! HTML entity tool definition.
//!
//! Decoding follows the HTML5 character reference rules: legacy names without
//! a trailing `;` (`&amp`, `&copy`) are expanded, numeric references to NUL,
//! surrogates or values past U+10FFFF become U+FFFD, and `&#128;`..`&#159;`
//! map through the Windows-1252 table.

use tracing::debug;

use super::ToolDefinition;
use crate::domains::tools::types::ToolResponse;

/// HTML entity encoder/decoder.
pub struct HtmlTool;

impl ToolDefinition for HtmlTool {
    const ID: &'static str = "html";
    const NAME: &'static str = "HTML Encoder/Decoder";
    const DESCRIPTION: &'static str = "Encode and decode HTML entities";
    const CATEGORY: &'static str = "encoding";
    const ICON: &'static str = "code2";
    const FEATURES: &'static [&'static str] = &["input-validation", "output-formatting"];
    const MODES: &'static [&'static str] = &["encode", "decode"];

    fn execute(input: &str, mode: &str) -> ToolResponse {
        debug!(mode, len = input.len(), "Running html tool");

        match mode {
            "encode" => ToolResponse::success(escape(input)),
            "decode" => ToolResponse::success(htmlize::unescape(input)),
            other => ToolResponse::unsupported_mode(other),
        }
    }
}

/// Escape the five characters that are special in HTML text and attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&#34;"),
            _ => out.push(c),
        }
    }
    out
}
