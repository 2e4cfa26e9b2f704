//! Base64 tool definition.
//!
//! Encodes and decodes text with the RFC 4648 standard and URL-safe
//! alphabets (both padded). Decoding accepts non-zero trailing bits in the
//! last symbol, so `aGl=` reads as `hi`.

use ::base64::alphabet;
use ::base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use ::base64::{DecodeError, Engine as _};
use tracing::debug;

use super::ToolDefinition;
use crate::domains::tools::types::ToolResponse;

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true);

/// Standard alphabet, padded.
const STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// URL-safe alphabet, padded.
const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Base64 encoder/decoder.
pub struct Base64Tool;

impl ToolDefinition for Base64Tool {
    const ID: &'static str = "base64";
    const NAME: &'static str = "Base64 Encoder/Decoder";
    const DESCRIPTION: &'static str = "Encode and decode Base64 strings";
    const CATEGORY: &'static str = "encoding";
    const ICON: &'static str = "code";
    const FEATURES: &'static [&'static str] = &["input-validation", "output-formatting"];
    const MODES: &'static [&'static str] = &["encode", "decode", "url-encode", "url-decode"];

    fn execute(input: &str, mode: &str) -> ToolResponse {
        debug!(mode, len = input.len(), "Running base64 tool");

        match mode {
            "encode" => ToolResponse::success(STANDARD.encode(input)),
            "decode" => match decode(&STANDARD, input) {
                Ok(text) => ToolResponse::success(text),
                Err(e) => ToolResponse::failure(format!("Invalid base64 string: {}", e)),
            },
            "url-encode" => ToolResponse::success(URL_SAFE.encode(input)),
            "url-decode" => match decode(&URL_SAFE, input) {
                Ok(text) => ToolResponse::success(text),
                Err(e) => ToolResponse::failure(format!("Invalid base64 URL string: {}", e)),
            },
            other => ToolResponse::unsupported_mode(other),
        }
    }
}

/// Decode with line breaks stripped, so wrapped (multi-line) input is accepted.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
fn decode(engine: &GeneralPurpose, input: &str) -> Result<String, DecodeError> {
    let compact: Vec<u8> = input
        .bytes()
        .filter(|b| !matches!(b, b'\r' | b'\n'))
        .collect();
    let bytes = engine.decode(compact)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_standard() {
        let result = Base64Tool::execute("hello world", "encode");
        assert_eq!(result.output, "aGVsbG8gd29ybGQ=");
        assert!(!result.is_error());
    }

    #[test]
    fn test_decode_standard() {
        let result = Base64Tool::execute("aGVsbG8gd29ybGQ=", "decode");
        assert_eq!(result.output, "hello world");
    }

    #[test]
    fn test_round_trip_non_ascii() {
        let text = "héllo wörld ✓ 🎉";
        let encoded = Base64Tool::execute(text, "encode").output;
        assert_eq!(Base64Tool::execute(&encoded, "decode").output, text);

        let encoded = Base64Tool::execute(text, "url-encode").output;
        assert_eq!(Base64Tool::execute(&encoded, "url-decode").output, text);
    }

    #[test]
    fn test_url_safe_alphabet() {
        // U+FBFF is EF AF BF in UTF-8, which hits both alphabet-specific symbols.
        let input = "\u{fbff}";
        let standard = Base64Tool::execute(input, "encode").output;
        let url_safe = Base64Tool::execute(input, "url-encode").output;
        assert_eq!(standard, "76+/");
        assert_eq!(url_safe, "76-_");
    }

    #[test]
    fn test_decode_multiline() {
        let result = Base64Tool::execute("aGVsbG8g\r\nd29ybGQ=\n", "decode");
        assert_eq!(result.output, "hello world");
    }

    #[test]
    fn test_decode_accepts_trailing_bits() {
        assert_eq!(Base64Tool::execute("aGl=", "decode").output, "hi");
        assert_eq!(Base64Tool::execute("YR==", "decode").output, "a");
        assert_eq!(Base64Tool::execute("aGl=", "url-decode").output, "hi");
    }

    #[test]
    fn test_encode_stays_canonical() {
        assert_eq!(Base64Tool::execute("hi", "encode").output, "aGk=");
    }

    #[test]
    fn test_decode_requires_padding() {
        assert!(Base64Tool::execute("aGk", "decode").is_error());
    }

    #[test]
    fn test_decode_empty() {
        let result = Base64Tool::execute("", "decode");
        assert_eq!(result.output, "");
        assert!(!result.is_error());
    }

    #[test]
    fn test_decode_invalid() {
        let result = Base64Tool::execute("not base64!", "decode");
        assert_eq!(result.output, "");
        assert!(
            result
                .error
                .as_deref()
                .unwrap()
                .starts_with("Invalid base64 string: ")
        );
    }

    #[test]
    fn test_url_decode_rejects_standard_alphabet() {
        let result = Base64Tool::execute("76+/", "url-decode");
        assert!(
            result
                .error
                .as_deref()
                .unwrap()
                .starts_with("Invalid base64 URL string: ")
        );
    }

    #[test]
    fn test_unsupported_mode() {
        let result = Base64Tool::execute("abc", "rot13");
        assert_eq!(result.error.as_deref(), Some("Unsupported mode: rot13"));
    }

    #[test]
    fn test_default_mode_is_encode() {
        assert_eq!(Base64Tool::default_mode(), "encode");
    }
}
