//! Lexa core - Configurable Lexical Analysis
//!
//! This crate contains the scanning machinery of the Lexa engine:
//! - Patterns and productions for describing a token language
//! - The analyzer that turns source text into categorized tokens
//! - A symbol table interning every distinct lexeme once
//! - Stack validation of bracket pairing over the token stream
//!
//! # Design Philosophy
//!
//! - **Caller-ordered rules**: productions are tried strictly in the order
//!   supplied, and the first match wins, never the longest
//! - **Fail fast**: the first unmatchable character stops the scan with a
//!   diagnosable error instead of a guessed recovery
//! - **Handles over text**: tokens carry a `SymbolId` and a byte `Span`,
//!   so lexeme text is stored once no matter how often it repeats
//!
//! Offsets throughout the crate are `u32` byte positions into the scanned
//! source, which caps a single input at 4 GiB.

mod analyzer;
mod brackets;
mod category;
mod char_class;
mod error;
mod pattern;
mod production;
mod span;
mod symbol_table;
mod token;

pub use analyzer::{scan, LexicalAnalyzer, ScanOutcome};
pub use brackets::{validate_brackets, BracketPair, BRACKET_PAIRS};
pub use category::{Category, Metadata, Subtype};
pub use char_class::CharClass;
pub use error::{BracketError, BracketErrorKind, ScanError, ScanErrorKind};
pub use pattern::{CustomPattern, MatchFn, Pattern};
pub use production::Production;
pub use span::{Span, SpanError};
pub use symbol_table::{SymbolId, SymbolTable};
pub use token::Token;
