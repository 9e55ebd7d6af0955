//! Lexical rules: a pattern plus the classification it assigns.
//!
//! Productions are configuration data. The engine ships none; callers build
//! an ordered list and hand it to the analyzer, and that order is
//! load-bearing: the first production that matches at the cursor wins, never
//! the longest. A rule set must therefore list multi-character alternatives
//! before their single-character prefixes (`<<` before `<`, `//` comments
//! before the `/` operator, float shapes before integer shapes).

use crate::{Category, Metadata, Pattern, Subtype};

/// One immutable lexical rule.
#[derive(Clone, Debug)]
pub struct Production {
    pattern: Pattern,
    category: Category,
    /// Ignorable productions consume input without emitting a token.
    ignorable: bool,
    metadata: Metadata,
}

impl Production {
    /// Token-emitting production.
    pub fn token(category: Category, pattern: Pattern) -> Self {
        Production {
            pattern,
            category,
            ignorable: false,
            metadata: Metadata::default(),
        }
    }

    /// Ignorable production: matched text is consumed and dropped
    /// (whitespace, comments).
    pub fn trivia(category: Category, pattern: Pattern) -> Self {
        Production {
            pattern,
            category,
            ignorable: true,
            metadata: Metadata::default(),
        }
    }

    /// Attach a subtype, stamped onto every token this production emits.
    #[must_use]
    pub fn with_subtype(mut self, subtype: Subtype) -> Self {
        self.metadata = Metadata::subtype(subtype);
        self
    }

    /// The pattern this production matches with.
    #[inline]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The category assigned to emitted tokens.
    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Whether matched text is dropped instead of emitted.
    #[inline]
    pub fn is_ignorable(&self) -> bool {
        self.ignorable
    }

    /// The production's extra attributes.
    #[inline]
    pub fn metadata(&self) -> Metadata {
        self.metadata
    }

    /// Match this production's pattern at byte offset `position` of `text`,
    /// returning the lexeme on success.
    ///
    /// Purely a query: no state changes, no forward searching.
    ///
    /// # Panics
    /// Panics if `position` is not a character boundary of `text`.
    pub fn try_match_at<'t>(&self, text: &'t str, position: usize) -> Option<&'t str> {
        let len = self.pattern.try_match_at(text, position)?;
        Some(&text[position..position + len])
    }
}
