//! Per-scan symbol table interning lexeme text.
//!
//! One table lives for the duration of one scan and is discarded with it.
//! Interning is amortized O(1); each distinct lexeme is stored once in the
//! arena and every token carries a [`SymbolId`] handle into it, so tokens
//! with the same text share one entry. There are no deletions.
//!
//! The text is held by both the lookup map and the arena. A single-storage
//! table would need leaked or self-referential strings; for a table whose
//! lifetime is one scan, owned storage on both sides is the simpler
//! contract.

use rustc_hash::FxHashMap;

/// Handle to an interned lexeme.
///
/// Ids are dense indexes in discovery order: the first distinct lexeme of a
/// scan gets id 0. Ids are only meaningful to the table that produced them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Arena index of this symbol.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Interning store for lexeme text.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    /// Lexeme text to handle.
    ids: FxHashMap<Box<str>, SymbolId>,
    /// Interned text in discovery order; [`SymbolId`] indexes this.
    lexemes: Vec<Box<str>>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Intern a lexeme, returning the existing handle for previously seen
    /// text and a fresh one otherwise.
    ///
    /// # Panics
    /// Panics if the table exceeds `u32::MAX` distinct lexemes.
    pub fn intern(&mut self, lexeme: &str) -> SymbolId {
        if let Some(&id) = self.ids.get(lexeme) {
            return id;
        }
        let raw = u32::try_from(self.lexemes.len())
            .unwrap_or_else(|_| panic!("symbol table exceeded {} distinct lexemes", u32::MAX));
        let id = SymbolId(raw);
        self.ids.insert(Box::from(lexeme), id);
        self.lexemes.push(Box::from(lexeme));
        id
    }

    /// The interned text for a handle.
    ///
    /// # Panics
    /// Panics if `id` did not come from this table.
    #[inline]
    pub fn resolve(&self, id: SymbolId) -> &str {
        &self.lexemes[id.index()]
    }

    /// Look up the handle for a lexeme without interning it.
    pub fn get(&self, lexeme: &str) -> Option<SymbolId> {
        self.ids.get(lexeme).copied()
    }

    /// All interned lexemes in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &str)> + '_ {
        (0u32..)
            .map(SymbolId)
            .zip(self.lexemes.iter())
            .map(|(id, lexeme)| (id, &**lexeme))
    }

    /// Number of distinct lexemes interned.
    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    /// Whether nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }
}
