//! The lexical analyzer: ordered first-match scanning with interning.
//!
//! # Scanning model
//!
//! The analyzer holds an immutable source snapshot, an ordered production
//! slice, and a byte cursor. Each [`LexicalAnalyzer::next_token`] call tries
//! the productions in order, anchored exactly at the cursor. The first
//! production that matches wins, never the longest match; resolving overlaps
//! by ordering is the rule set author's job, and the engine does not reorder
//! or second-guess.
//!
//! Failure is fail-fast: when nothing matches, the cursor does not advance
//! and the error is returned to the caller. There is no resynchronization,
//! so a failed scan yields the tokens collected so far and exactly one
//! error. A production that matches zero bytes is reported as an error too;
//! ignorable zero-width matches would otherwise loop forever.
//!
//! Every successful match strictly advances the cursor, so a scan terminates
//! after at most `source.len()` steps. Re-scanning after an edit means
//! constructing a fresh analyzer (and with it a fresh symbol table) over the
//! new snapshot.

use crate::{Production, ScanError, Span, SymbolTable, Token};

/// Stateful scanner over one source snapshot.
pub struct LexicalAnalyzer<'a> {
    source: &'a str,
    productions: &'a [Production],
    /// Total source length; offsets are u32 like [`Span`].
    source_len: u32,
    /// Byte offset of the next match attempt.
    cursor: u32,
    symbols: SymbolTable,
}

impl<'a> LexicalAnalyzer<'a> {
    /// Create an analyzer at offset 0 with an empty symbol table.
    ///
    /// # Panics
    /// Panics if `source` is longer than `u32::MAX` bytes.
    pub fn new(source: &'a str, productions: &'a [Production]) -> Self {
        let source_len = u32::try_from(source.len())
            .unwrap_or_else(|_| panic!("source length {} exceeds u32::MAX bytes", source.len()));
        LexicalAnalyzer {
            source,
            productions,
            source_len,
            cursor: 0,
            symbols: SymbolTable::new(),
        }
    }

    /// Produce the next token.
    ///
    /// Returns `Ok(None)` at end of input (also when only ignorable text
    /// remains), `Ok(Some(..))` for the next non-ignorable match, and
    /// `Err(..)` when no production matches at the cursor or a production
    /// matches zero bytes. The cursor does not advance on an error, so
    /// calling again returns the same error.
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        loop {
            if self.cursor >= self.source_len {
                return Ok(None);
            }
            let start = self.cursor;
            let Some((production, len)) = self.match_at(start) else {
                let found = self.source[start as usize..]
                    .chars()
                    .next()
                    .unwrap_or('\u{fffd}');
                return Err(ScanError::unexpected_character(start, found));
            };
            if len == 0 {
                return Err(ScanError::zero_width_match(start, production.category()));
            }
            #[expect(
                clippy::cast_possible_truncation,
                reason = "match length is bounded by the source length, which fits u32 by construction"
            )]
            let len = len as u32;
            self.cursor = start + len;
            if production.is_ignorable() {
                continue;
            }
            let span = Span::new(start, self.cursor);
            let symbol = self.symbols.intern(&self.source[span.to_range()]);
            return Ok(Some(Token::new(
                production.category(),
                production.metadata().subtype,
                span,
                symbol,
            )));
        }
    }

    /// First production matching at `start`, with its match length.
    ///
    /// The returned reference borrows from the production slice, not from
    /// the analyzer, so the caller may keep it across interning.
    fn match_at(&self, start: u32) -> Option<(&'a Production, usize)> {
        let rest = &self.source[start as usize..];
        self.productions
            .iter()
            .find_map(|production| production.pattern().match_prefix(rest).map(|n| (production, n)))
    }

    /// Current cursor position in bytes.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.cursor
    }

    /// The symbol table accumulated so far.
    #[inline]
    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Consume the analyzer, keeping the symbol table.
    #[inline]
    pub fn into_symbol_table(self) -> SymbolTable {
        self.symbols
    }
}

/// Everything one full scan produced.
///
/// `tokens` holds whatever was collected before `error` (if any) stopped the
/// scan; a clean scan has `error: None`.
#[derive(Clone, Debug)]
pub struct ScanOutcome {
    /// Tokens in source order.
    pub tokens: Vec<Token>,
    /// The scan's symbol table.
    pub symbols: SymbolTable,
    /// The failure that halted scanning, if any.
    pub error: Option<ScanError>,
}

impl ScanOutcome {
    /// Whether the scan reached end of input without an error.
    pub fn is_clean(&self) -> bool {
        self.error.is_none()
    }
}

/// Scan a whole source: pull tokens until end of input or the first failure.
///
/// # Panics
/// Panics if `source` is longer than `u32::MAX` bytes.
pub fn scan(source: &str, productions: &[Production]) -> ScanOutcome {
    let mut analyzer = LexicalAnalyzer::new(source, productions);
    let mut tokens = Vec::new();
    let error = loop {
        match analyzer.next_token() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => break None,
            Err(err) => break Some(err),
        }
    };
    ScanOutcome {
        tokens,
        symbols: analyzer.into_symbol_table(),
        error,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
