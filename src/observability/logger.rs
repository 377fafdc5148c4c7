//! Structured JSON logger
//!
//! - One log line = one event
//! - Synchronous, no buffering
//! - Deterministic key order: event, severity, then fields as given
//! - Errors go to stderr, everything else to stdout

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger that writes one JSON line per event.
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::format_line(severity, event, fields);
        let _ = writeln!(io::stdout(), "{}", line);
    }

    /// Log to stderr (for errors)
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::format_line(severity, event, fields);
        let _ = writeln!(io::stderr(), "{}", line);
    }

    /// Builds the JSON line by hand: no allocations beyond the output
    /// string, keys always in the same order.
    fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut output = String::with_capacity(128);

        output.push('{');
        output.push_str("\"event\":\"");
        Self::escape_json(event, &mut output);
        output.push_str("\",\"severity\":\"");
        output.push_str(severity.as_str());
        output.push('"');

        for (key, value) in fields {
            output.push_str(",\"");
            Self::escape_json(key, &mut output);
            output.push_str("\":\"");
            Self::escape_json(value, &mut output);
            output.push('"');
        }

        output.push('}');
        output
    }

    /// Escapes a string for inclusion in a JSON value
    fn escape_json(input: &str, output: &mut String) {
        for c in input.chars() {
            match c {
                '"' => output.push_str("\\\""),
                '\\' => output.push_str("\\\\"),
                '\n' => output.push_str("\\n"),
                '\r' => output.push_str("\\r"),
                '\t' => output.push_str("\\t"),
                c if (c as u32) < 0x20 => {
                    output.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => output.push(c),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_key_order() {
        let line = Logger::format_line(
            Severity::Info,
            "operation_ok",
            &[("kind", "query"), ("operation", "products")],
        );
        assert_eq!(
            line,
            r#"{"event":"operation_ok","severity":"INFO","kind":"query","operation":"products"}"#
        );
    }

    #[test]
    fn test_format_line_is_valid_json() {
        let line = Logger::format_line(
            Severity::Error,
            "operation_failed",
            &[("error", "quote \" and newline \n")],
        );
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["severity"], "ERROR");
        assert_eq!(parsed["error"], "quote \" and newline \n");
    }

    #[test]
    fn test_escape_control_characters() {
        let mut out = String::new();
        Logger::escape_json("a\u{1}b", &mut out);
        assert_eq!(out, "a\\u0001b");
    }
}
