//! The `symbols` command: interned lexeme dump for one input file.

use lexa_core::scan;

use super::read_file;

/// Scan `path` and display the symbol table in discovery order.
pub fn dump_symbols(path: &str) {
    let source = read_file(path);
    let rules = crate::rules::script_rules();
    let outcome = scan(&source, &rules);

    println!(
        "Symbols for '{}' ({} distinct):",
        path,
        outcome.symbols.len()
    );
    for (id, lexeme) in outcome.symbols.iter() {
        println!("  {:>4}  {lexeme}", id.index());
    }

    if let Some(error) = &outcome.error {
        println!();
        println!("Scan stopped: {error}");
        std::process::exit(1);
    }
}
