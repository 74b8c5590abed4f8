//! Output formatters for command results.
//!
//! Every command builds a serializable report and hands it here, so the
//! three output modes stay consistent across commands.

use crate::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Formats `data` according to `format`.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Examples
///
/// ```
/// use pdatagen_cli::OutputFormat;
/// use pdatagen_cli::formatters::format_output;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     package: String,
///     files: usize,
/// }
///
/// let summary = Summary { package: "ptrace".to_string(), files: 18 };
/// let output = format_output(&summary, OutputFormat::Json)?;
/// assert!(output.contains("\"package\": \"ptrace\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Formats data as indented JSON.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Formats data as single-line JSON.
    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, json};

    /// Formats data as single-line JSON, suitable for piping.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

/// Human-readable output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;

    /// Formats data as an indented outline with colored keys and values.
    ///
    /// Objects become `key: value` lines, arrays become `-` items.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        write_value(&mut out, &value, 0);
        Ok(out.trim_end().to_string())
    }

    fn write_value(out: &mut String, value: &Value, indent: usize) {
        let pad = "  ".repeat(indent);
        match value {
            Value::Object(map) => {
                for (key, val) in map {
                    out.push_str(&pad);
                    out.push_str(&key.blue().bold().to_string());
                    out.push(':');
                    if is_nested(val) {
                        out.push('\n');
                        write_value(out, val, indent + 1);
                    } else {
                        out.push(' ');
                        out.push_str(&scalar(val));
                        out.push('\n');
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    out.push_str(&pad);
                    out.push_str("- ");
                    if is_nested(item) {
                        out.push('\n');
                        write_value(out, item, indent + 1);
                    } else {
                        out.push_str(&scalar(item));
                        out.push('\n');
                    }
                }
            }
            other => {
                out.push_str(&pad);
                out.push_str(&scalar(other));
                out.push('\n');
            }
        }
    }

    fn is_nested(value: &Value) -> bool {
        match value {
            Value::Object(map) => !map.is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => false,
        }
    }

    fn scalar(value: &Value) -> String {
        match value {
            Value::Null => "null".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Array(_) => "[]".to_string(),
            Value::Object(_) => "{}".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Report {
        package: String,
        shared: bool,
        structs: Vec<String>,
    }

    fn report() -> Report {
        Report {
            package: "pcommon".to_string(),
            shared: true,
            structs: vec!["Resource".to_string(), "InstrumentationScope".to_string()],
        }
    }

    #[test]
    fn test_json_format() {
        let output = json::format(&report()).unwrap();
        assert!(output.contains("\"package\": \"pcommon\""));
        assert!(output.contains("\"shared\": true"));
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_text_format_is_single_line() {
        let output = text::format(&report()).unwrap();
        assert!(!output.contains('\n'));
        assert!(output.contains("\"package\":\"pcommon\""));
    }

    #[test]
    fn test_pretty_format_outline() {
        colored::control::set_override(false);
        let output = pretty::format(&report()).unwrap();

        assert!(output.contains("package: pcommon"));
        assert!(output.contains("shared: true"));
        assert!(output.contains("structs:\n  - Resource\n  - InstrumentationScope"));
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn test_pretty_format_empty_collections() {
        colored::control::set_override(false);
        let output = pretty::format(&serde_json::json!({ "files": [] })).unwrap();
        assert_eq!(output, "files: []");
    }

    #[test]
    fn test_format_output_dispatch() {
        assert!(format_output(&report(), OutputFormat::Json).unwrap().contains('\n'));
        assert!(!format_output(&report(), OutputFormat::Text).unwrap().contains('\n'));
        assert!(format_output(&report(), OutputFormat::Pretty).unwrap().contains("pcommon"));
    }
}
