//! Report Emitters
//!
//! Output formats for a finished scan:
//! - Terminal: human-readable listing with optional ANSI color
//! - JSON: machine-readable output for tooling
//!
//! Each emitter implements the [`ReportEmitter`] trait; the CLI picks
//! one per invocation and hands it a [`ScanReport`].

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use std::fmt::Write;

use lexa_core::{SymbolTable, Token};

use crate::report::PositionedError;

/// Everything an emitter needs to present one finished scan.
///
/// Positions were already resolved when the errors were built, and
/// lexeme text comes from the symbol table, so the report carries a
/// display name rather than the source text itself.
#[derive(Clone, Copy, Debug)]
pub struct ScanReport<'a> {
    /// Display name of the input, usually its path.
    pub source_name: &'a str,
    /// Tokens in source order.
    pub tokens: &'a [Token],
    /// Interned lexemes in discovery order.
    pub symbols: &'a SymbolTable,
    /// Positioned errors, scan error first.
    pub errors: &'a [PositionedError],
}

impl ScanReport<'_> {
    /// True when the scan produced no errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Trait for emitting a scan report in some output format.
pub trait ReportEmitter {
    /// Emit one report.
    fn emit(&mut self, report: &ScanReport<'_>);

    /// Flush any buffered output.
    fn flush(&mut self);
}

/// Returns a trailing comma for JSON list serialization.
///
/// Returns `","` when `index` is not the last element, `""` otherwise.
pub(crate) fn trailing_comma(index: usize, total: usize) -> &'static str {
    if index + 1 < total {
        ","
    } else {
        ""
    }
}

/// Escape a string for JSON output.
pub(crate) fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_json() {
        assert_eq!(escape_json("hello"), "hello");
        assert_eq!(escape_json("\"quoted\""), "\\\"quoted\\\"");
        assert_eq!(escape_json("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_json("path\\file"), "path\\\\file");
        assert_eq!(escape_json("tab\there"), "tab\\there");
        assert_eq!(escape_json("\u{1}"), "\\u0001");
    }

    #[test]
    fn test_trailing_comma() {
        assert_eq!(trailing_comma(0, 3), ",");
        assert_eq!(trailing_comma(1, 3), ",");
        assert_eq!(trailing_comma(2, 3), "");
        assert_eq!(trailing_comma(0, 1), "");
    }
}
