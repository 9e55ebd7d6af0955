//! Terminal Emitter
//!
//! Human-readable scan output with optional ANSI color support.

use std::io::{self, Write};

use super::{ReportEmitter, ScanReport};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` decides; it is ignored for `Always`
    /// and `Never`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color=` flag value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// Prints a header line, the token listing, then any errors with their
/// `name:row:column` location and a closing error count.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` feeds `ColorMode::Auto` resolution and comes from the
    /// caller, which knows what the writer actually is.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_header(&mut self, report: &ScanReport<'_>) {
        self.write_colored(report.source_name, colors::BOLD);
        let tokens = report.tokens.len();
        let symbols = report.symbols.len();
        let _ = writeln!(
            self.writer,
            ": {tokens} token{}, {symbols} symbol{}",
            plural_s(tokens),
            plural_s(symbols)
        );
    }

    fn write_tokens(&mut self, report: &ScanReport<'_>) {
        if report.tokens.is_empty() {
            return;
        }
        let _ = writeln!(self.writer);
        for token in report.tokens {
            let span_text = format!("{}..{}", token.span.start, token.span.end);
            let kind = match token.subtype {
                Some(subtype) => format!("{} ({subtype})", token.category),
                None => token.category.to_string(),
            };
            let lexeme = report.symbols.resolve(token.symbol);
            let _ = writeln!(self.writer, "  {span_text:>10}  {kind:<26} {lexeme}");
        }
    }

    fn write_errors(&mut self, report: &ScanReport<'_>) {
        if report.errors.is_empty() {
            return;
        }
        let _ = writeln!(self.writer);
        for error in report.errors {
            self.write_colored("error", colors::ERROR);
            let _ = writeln!(self.writer, ": {}", error.error);
            let _ = writeln!(
                self.writer,
                "  --> {}:{}",
                report.source_name, error.position
            );
        }

        let count = report.errors.len();
        let _ = writeln!(self.writer);
        self.write_colored("error", colors::ERROR);
        let _ = writeln!(self.writer, ": {count} error{} found", plural_s(count));
    }
}

impl TerminalEmitter<io::Stdout> {
    /// Create a terminal emitter for stdout.
    ///
    /// `is_tty` should come from `IsTerminal` on stdout at the call
    /// site, where `ColorMode::Auto` is resolved.
    pub fn stdout(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer: io::stdout(),
            colors: mode.should_use_colors(is_tty),
        }
    }
}

impl<W: Write> ReportEmitter for TerminalEmitter<W> {
    fn emit(&mut self, report: &ScanReport<'_>) {
        self.write_header(report);
        self.write_tokens(report);
        self.write_errors(report);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
