//! Tokens produced by the analyzer.

use crate::{Category, Span, Subtype, SymbolId};

/// One classified lexeme occurrence.
///
/// Layout: 20 bytes. The lexeme text itself lives in the scan's
/// [`SymbolTable`](crate::SymbolTable); every occurrence of the same text
/// carries the same [`SymbolId`]. `span.start` is the occurrence index in
/// the source, `span` as a whole slices the lexeme back out of it.
///
/// Tokens are never constructed for ignorable productions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    /// Category of the production that matched.
    pub category: Category,
    /// Subtype from the production's metadata, if any.
    pub subtype: Option<Subtype>,
    /// Byte range of the lexeme in the source.
    pub span: Span,
    /// Handle to the interned lexeme text.
    pub symbol: SymbolId,
}

impl Token {
    /// Create a token.
    #[inline]
    pub const fn new(
        category: Category,
        subtype: Option<Subtype>,
        span: Span,
        symbol: SymbolId,
    ) -> Self {
        Token {
            category,
            subtype,
            span,
            symbol,
        }
    }

    /// The occurrence index: byte offset where the lexeme starts.
    #[inline]
    pub const fn offset(&self) -> u32 {
        self.span.start
    }
}
