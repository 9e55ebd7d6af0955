//! Engine error types.
//!
//! Two families, both carrying a byte offset for the position mapper:
//! [`ScanError`] halts a scan (fail-fast, no recovery), while
//! [`BracketError`]s are collected by the validator, which always completes
//! its pass. All types derive `Clone, Debug, Eq, PartialEq, Hash`.

use crate::Category;

use std::fmt;

/// Fatal scanning failure. At most one per scan; the analyzer does not
/// advance past it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScanError {
    /// What went wrong.
    pub kind: ScanErrorKind,
    /// Byte offset of the failure (the cursor position).
    pub offset: u32,
}

/// What kind of scanning failure occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScanErrorKind {
    /// No production matched at the cursor.
    UnexpectedCharacter {
        /// The character at the cursor.
        found: char,
    },
    /// A production matched without consuming input. This is a broken rule
    /// set, not a source problem; surfacing it keeps ignorable-match loops
    /// from spinning forever.
    ZeroWidthMatch {
        /// Category of the offending production.
        category: Category,
    },
}

impl ScanError {
    /// No production matched the character at `offset`.
    #[cold]
    pub fn unexpected_character(offset: u32, found: char) -> Self {
        ScanError {
            kind: ScanErrorKind::UnexpectedCharacter { found },
            offset,
        }
    }

    /// A production matched zero characters at `offset`.
    #[cold]
    pub fn zero_width_match(offset: u32, category: Category) -> Self {
        ScanError {
            kind: ScanErrorKind::ZeroWidthMatch { category },
            offset,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ScanErrorKind::UnexpectedCharacter { found } => {
                write!(
                    f,
                    "unexpected character `{}` at offset {}",
                    found.escape_debug(),
                    self.offset
                )
            }
            ScanErrorKind::ZeroWidthMatch { category } => {
                write!(
                    f,
                    "production for `{}` matched zero characters at offset {}",
                    category, self.offset
                )
            }
        }
    }
}

impl std::error::Error for ScanError {}

/// One bracket-balance violation found by the validator.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BracketError {
    /// What went wrong.
    pub kind: BracketErrorKind,
    /// Byte offset of the offending token.
    pub offset: u32,
}

/// What kind of balance violation occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BracketErrorKind {
    /// Closing bracket with no opener on the stack.
    UnexpectedClosing {
        /// The closing character, e.g. `)`.
        bracket: char,
    },
    /// Opening bracket still on the stack at end of input.
    UnclosedOpening {
        /// The opening character, e.g. `(`.
        bracket: char,
    },
}

impl BracketError {
    /// Closing bracket at `offset` had no matching opener.
    #[cold]
    pub fn unexpected_closing(offset: u32, bracket: char) -> Self {
        BracketError {
            kind: BracketErrorKind::UnexpectedClosing { bracket },
            offset,
        }
    }

    /// Opening bracket at `offset` was never closed.
    #[cold]
    pub fn unclosed_opening(offset: u32, bracket: char) -> Self {
        BracketError {
            kind: BracketErrorKind::UnclosedOpening { bracket },
            offset,
        }
    }
}

impl fmt::Display for BracketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BracketErrorKind::UnexpectedClosing { bracket } => {
                write!(
                    f,
                    "unexpected closing bracket `{}` at offset {}",
                    bracket, self.offset
                )
            }
            BracketErrorKind::UnclosedOpening { bracket } => {
                write!(
                    f,
                    "unclosed opening bracket `{}` at offset {}",
                    bracket, self.offset
                )
            }
        }
    }
}

impl std::error::Error for BracketError {}
