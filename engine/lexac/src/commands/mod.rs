//! Command handlers for the Lexa CLI.
//!
//! Each submodule implements one CLI command. The shared `read_file`
//! helper lives here in the module root.

mod scan;
mod symbols;
mod tokens;

pub use scan::{run_scan, ScanOptions};
pub use symbols::dump_symbols;
pub use tokens::dump_tokens;

/// Read a file to a string, or print a useful message and exit.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
