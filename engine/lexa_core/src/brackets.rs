//! Stack validation of bracket pairing over a finished token stream.
//!
//! Each pair in [`BRACKET_PAIRS`] is checked independently with its own
//! stack pass, so a closing bracket is matched against the nearest
//! unmatched opener of the same pair only. Interleavings across pairs
//! such as `([)]` therefore pass validation; catching those would take a
//! grammar, and this layer deliberately stops short of one.
//!
//! Error order follows from the pass structure: for each pair, unexpected
//! closers in token order, then unclosed openers in the order they were
//! opened, with the pairs reported in `(`, `[`, `{` order.

use crate::error::BracketError;
use crate::symbol_table::SymbolTable;
use crate::token::Token;

/// A matched pair of bracket characters checked by [`validate_brackets`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BracketPair {
    pub open: char,
    pub close: char,
}

/// The pairs recognized by [`validate_brackets`], in reporting order.
pub const BRACKET_PAIRS: [BracketPair; 3] = [
    BracketPair { open: '(', close: ')' },
    BracketPair { open: '[', close: ']' },
    BracketPair { open: '{', close: '}' },
];

/// Checks every pair in [`BRACKET_PAIRS`] against `tokens` and collects
/// all pairing errors.
///
/// A token participates when its interned lexeme is exactly the pair's
/// single open or close character, so a string token whose lexeme happens
/// to contain a bracket never counts. Returns an empty vector when every
/// pair balances.
pub fn validate_brackets(tokens: &[Token], symbols: &SymbolTable) -> Vec<BracketError> {
    let mut errors = Vec::new();
    for pair in BRACKET_PAIRS {
        validate_pair(tokens, symbols, pair, &mut errors);
    }
    errors
}

fn validate_pair(
    tokens: &[Token],
    symbols: &SymbolTable,
    pair: BracketPair,
    errors: &mut Vec<BracketError>,
) {
    let mut open_offsets: Vec<u32> = Vec::new();
    for token in tokens {
        let lexeme = symbols.resolve(token.symbol);
        if lexeme_is(lexeme, pair.open) {
            open_offsets.push(token.span.start);
        } else if lexeme_is(lexeme, pair.close) && open_offsets.pop().is_none() {
            errors.push(BracketError::unexpected_closing(token.span.start, pair.close));
        }
    }
    for offset in open_offsets {
        errors.push(BracketError::unclosed_opening(offset, pair.open));
    }
}

/// True when `lexeme` is exactly the single character `bracket`.
fn lexeme_is(lexeme: &str, bracket: char) -> bool {
    let mut chars = lexeme.chars();
    chars.next() == Some(bracket) && chars.next().is_none()
}
