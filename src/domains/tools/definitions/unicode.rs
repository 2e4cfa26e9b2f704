//! Unicode escape tool definition.
//!
//! `encode` turns every non-ASCII character into `\uXXXX` escapes. Characters
//! outside the Basic Multilingual Plane are written as a UTF-16 surrogate
//! pair (`\ud83d\ude00`), so `decode` restores every code point. Text that
//! already contains a literal `\uXXXX` passes through `encode` untouched and
//! is decoded along with the rest.

use std::fmt::Write as _;

use tracing::debug;

use super::ToolDefinition;
use crate::domains::tools::types::ToolResponse;

const ESCAPE_PREFIX: &str = "\\u";

/// Length of one escape: `\u` plus four hex digits.
const ESCAPE_LEN: usize = 6;

/// Unicode escape encoder/decoder and character inspector.
pub struct UnicodeTool;

impl ToolDefinition for UnicodeTool {
    const ID: &'static str = "unicode";
    const NAME: &'static str = "Unicode Encoder/Decoder";
    const DESCRIPTION: &'static str = "Encode and decode Unicode characters";
    const CATEGORY: &'static str = "encoding";
    const ICON: &'static str = "globe";
    const FEATURES: &'static [&'static str] = &["input-validation", "output-formatting"];
    const MODES: &'static [&'static str] = &["encode", "decode", "info"];

    fn execute(input: &str, mode: &str) -> ToolResponse {
        debug!(mode, len = input.len(), "Running unicode tool");

        match mode {
            "encode" => ToolResponse::success(escape(input)),
            "decode" => ToolResponse::success(unescape(input)),
            "info" => ToolResponse::success(describe(input)),
            other => ToolResponse::unsupported_mode(other),
        }
    }
}

/// Replace every character above U+007F with lowercase `\uXXXX` escapes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut units = [0u16; 2];
    for c in input.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units) {
            let _ = write!(out, "{}{:04x}", ESCAPE_PREFIX, unit);
        }
    }
    out
}

/// Replace each well-formed `\uXXXX` escape with its character.
///
/// The input is scanned once, left to right; substituted characters are never
/// rescanned. A high surrogate immediately followed by a low surrogate is
/// combined, a lone surrogate becomes U+FFFD, and anything that is not a
/// complete escape is copied through unchanged.
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(ESCAPE_PREFIX) {
        out.push_str(&rest[..pos]);
        let candidate = &rest[pos..];

        let Some(unit) = parse_unit(candidate) else {
            out.push_str(ESCAPE_PREFIX);
            rest = &candidate[ESCAPE_PREFIX.len()..];
            continue;
        };
        rest = &candidate[ESCAPE_LEN..];

        if is_high_surrogate(unit) {
            if let Some(low) = parse_unit(rest).filter(|u| is_low_surrogate(*u)) {
                out.push(combine_surrogates(unit, low));
                rest = &rest[ESCAPE_LEN..];
                continue;
            }
        }
        out.push(char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    out.push_str(rest);
    out
}

/// One line per character: `'<char>' (U+XXXX)`.
pub fn describe(input: &str) -> String {
    input
        .chars()
        .map(|c| format!("'{}' (U+{:04X})", c, u32::from(c)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a leading `\uXXXX` escape into its UTF-16 code unit.
fn parse_unit(s: &str) -> Option<u16> {
    let digits = s.strip_prefix(ESCAPE_PREFIX)?.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

fn combine_surrogates(high: u16, low: u16) -> char {
    let code = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}
