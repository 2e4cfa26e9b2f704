//! JSON tool definition.
//!
//! Validates the input as a JSON document, then pretty-prints, minifies or
//! just confirms it. Output follows `serde_json`'s value model: object keys
//! come out sorted and numbers are re-rendered from their parsed value.
//! Floats with no fractional part below 1e21 print as integers (`1.0` becomes
//! `1`, `1e2` becomes `100`, `-0` stays `-0`).

use std::io;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};
use tracing::debug;

use super::ToolDefinition;
use crate::domains::tools::types::ToolResponse;

/// JSON formatter/validator.
pub struct JsonTool;

impl ToolDefinition for JsonTool {
    const ID: &'static str = "json";
    const NAME: &'static str = "JSON Formatter/Validator";
    const DESCRIPTION: &'static str = "Format and validate JSON data";
    const CATEGORY: &'static str = "formatting";
    const ICON: &'static str = "braces";
    const FEATURES: &'static [&'static str] =
        &["input-validation", "output-formatting", "settings"];
    const MODES: &'static [&'static str] = &["format", "prettify", "minify", "validate"];

    fn execute(input: &str, mode: &str) -> ToolResponse {
        debug!(mode, len = input.len(), "Running json tool");

        // The document is validated before the mode is looked at.
        let value: Value = match serde_json::from_str(input) {
            Ok(v) => v,
            Err(e) => return ToolResponse::failure(format!("Invalid JSON: {}", e)),
        };

        match mode {
            "format" | "prettify" => match render(&value, PrettyFormatter::new()) {
                Ok(text) => ToolResponse::success(text),
                Err(e) => ToolResponse::failure(format!("Error formatting JSON: {}", e)),
            },
            "minify" => match render(&value, CompactFormatter) {
                Ok(text) => ToolResponse::success(text),
                Err(e) => ToolResponse::failure(format!("Error minifying JSON: {}", e)),
            },
            "validate" => ToolResponse::success("Valid JSON"),
            other => ToolResponse::unsupported_mode(other),
        }
    }
}

/// Serialize `value` through `formatter`, printing integral floats as integers.
fn render<F: Formatter>(value: &Value, formatter: F) -> serde_json::Result<String> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, IntegralFloats(formatter));
    value.serialize(&mut serializer)?;
    String::from_utf8(out)
        .map_err(|e| serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Upper bound (exclusive) for printing a float without exponent or fraction.
const INTEGRAL_LIMIT: f64 = 1e21;

/// Wraps a formatter and overrides float output only.
struct IntegralFloats<F>(F);

impl<F: Formatter> Formatter for IntegralFloats<F> {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if value.is_finite() && value.fract() == 0.0 && value.abs() < INTEGRAL_LIMIT {
            write!(writer, "{:.0}", value)
        } else {
            self.0.write_f64(writer, value)
        }
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_object_value(writer)
    }
}
