//! URL tool definition.
//!
//! Two escaping conventions are offered:
//! - query component (`encode`/`decode`): space becomes `+`
//! - path segment (`encode-component`/`decode-component`): space becomes
//!   `%20` and the sub-delimiters `$&+:=@` are left alone
//!
//! Decoding is strict: a `%` not followed by two hex digits is an error.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use thiserror::Error;
use tracing::debug;

use super::ToolDefinition;
use crate::domains::tools::types::ToolResponse;

/// Bytes escaped in a query component: everything but `A-Za-z0-9-_.~`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Bytes escaped in a path segment.
const PATH_SEGMENT: &AsciiSet = &QUERY_COMPONENT
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// A malformed `%` escape. Holds up to three bytes starting at the `%`.
#[derive(Debug, Error)]
#[error("invalid URL escape {0:?}")]
pub struct EscapeError(String);

/// URL encoder/decoder.
pub struct UrlTool;

impl ToolDefinition for UrlTool {
    const ID: &'static str = "url";
    const NAME: &'static str = "URL Encoder/Decoder";
    const DESCRIPTION: &'static str = "Encode and decode URL parameters";
    const CATEGORY: &'static str = "encoding";
    const ICON: &'static str = "link";
    const FEATURES: &'static [&'static str] = &["input-validation", "output-formatting"];
    const MODES: &'static [&'static str] =
        &["encode", "decode", "encode-component", "decode-component"];

    fn execute(input: &str, mode: &str) -> ToolResponse {
        debug!(mode, len = input.len(), "Running url tool");

        match mode {
            "encode" => ToolResponse::success(query_escape(input)),
            "decode" => query_unescape(input)
                .map_err(|e| format!("Invalid URL encoding: {}", e))
                .into(),
            "encode-component" => ToolResponse::success(path_escape(input)),
            "decode-component" => path_unescape(input)
                .map_err(|e| format!("Invalid URL path encoding: {}", e))
                .into(),
            other => ToolResponse::unsupported_mode(other),
        }
    }
}

/// Escape for use inside a query string.
pub fn query_escape(input: &str) -> String {
    input
        .split(' ')
        .map(|part| utf8_percent_encode(part, QUERY_COMPONENT).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Reverse [`query_escape`], treating `+` as a space.
pub fn query_unescape(input: &str) -> Result<String, EscapeError> {
    check_escapes(input)?;
    let spaced = input.replace('+', " ");
    Ok(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
}

/// Escape for use as a single path segment.
pub fn path_escape(input: &str) -> String {
    utf8_percent_encode(input, PATH_SEGMENT).to_string()
}

/// Reverse [`path_escape`]. `+` is kept literally.
pub fn path_unescape(input: &str) -> Result<String, EscapeError> {
    check_escapes(input)?;
    Ok(percent_decode_str(input).decode_utf8_lossy().into_owned())
}

/// Reject any `%` that does not start a two-hex-digit escape.
fn check_escapes(input: &str) -> Result<(), EscapeError> {
    let bytes = input.as_bytes();
    for (i, _) in bytes.iter().enumerate().filter(|(_, b)| **b == b'%') {
        let well_formed = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            let end = (i + 3).min(bytes.len());
            return Err(EscapeError(
                String::from_utf8_lossy(&bytes[i..end]).into_owned(),
            ));
        }
    }
    Ok(())
}
