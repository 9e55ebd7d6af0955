//! The `tokens` command: token stream dump for one input file.

use lexa_core::scan;

use super::read_file;

/// Tokenize `path` with the shipped rule set and display the stream.
pub fn dump_tokens(path: &str) {
    let source = read_file(path);
    let rules = crate::rules::script_rules();
    let outcome = scan(&source, &rules);

    println!("Tokens for '{}' ({} tokens):", path, outcome.tokens.len());
    for token in &outcome.tokens {
        let kind = match token.subtype {
            Some(subtype) => format!("{}/{subtype}", token.category),
            None => token.category.to_string(),
        };
        println!(
            "  {kind} @ {}: {}",
            token.span,
            outcome.symbols.resolve(token.symbol)
        );
    }

    if let Some(error) = &outcome.error {
        println!();
        println!("Scan stopped: {error}");
        std::process::exit(1);
    }
}
