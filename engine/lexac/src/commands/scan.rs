//! The `scan` command: full analysis of one input file.

use std::io::IsTerminal;

use lexa_core::{scan, validate_brackets};
use lexa_diagnostic::{
    position_errors, ColorMode, JsonEmitter, ReportEmitter, ScanReport, TerminalEmitter,
};

use super::read_file;

/// Options accepted by `lexa scan`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanOptions {
    /// Emit the report as JSON instead of the terminal listing.
    pub json: bool,
    /// Color handling for the terminal listing.
    pub color: ColorMode,
}

/// Scan `path` with the shipped rule set, validate brackets and emit a
/// report. Exits with status 1 when any error was reported.
pub fn run_scan(path: &str, options: &ScanOptions) {
    let source = read_file(path);
    let rules = crate::rules::script_rules();

    let outcome = scan(&source, &rules);
    let bracket_errors = validate_brackets(&outcome.tokens, &outcome.symbols);
    tracing::debug!(
        tokens = outcome.tokens.len(),
        symbols = outcome.symbols.len(),
        bracket_errors = bracket_errors.len(),
        scan_failed = outcome.error.is_some(),
        "scan finished"
    );

    let errors = position_errors(&source, outcome.error.clone(), bracket_errors);
    let report = ScanReport {
        source_name: path,
        tokens: &outcome.tokens,
        symbols: &outcome.symbols,
        errors: &errors,
    };
    let had_errors = !report.is_clean();

    if options.json {
        let mut emitter = JsonEmitter::new(std::io::stdout());
        emitter.emit(&report);
        emitter.flush();
    } else {
        let is_tty = std::io::stdout().is_terminal();
        let mut emitter = TerminalEmitter::stdout(options.color, is_tty);
        emitter.emit(&report);
        emitter.flush();
    }

    if had_errors {
        std::process::exit(1);
    }
}
