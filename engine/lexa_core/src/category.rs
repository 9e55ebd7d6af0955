//! Token classification: categories, subtypes, and production metadata.

use std::fmt;

/// Token category assigned by the production that matched the lexeme.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    /// Reserved word (`let`, `if`, ...).
    Keyword,
    /// Numeric literal, integer or decimal.
    Number,
    /// Quoted string literal, quotes included in the lexeme.
    String,
    /// Operator of any flavor; see [`Subtype`] for the flavor.
    Operator,
    /// Name that is not a reserved word.
    Identifier,
    /// Structural character: brackets and separators.
    Punctuation,
    /// Horizontal or vertical whitespace.
    Whitespace,
    /// Line or block comment.
    Comment,
}

impl Category {
    /// Lowercase name as it appears in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Number => "number",
            Category::String => "string",
            Category::Operator => "operator",
            Category::Identifier => "identifier",
            Category::Punctuation => "punctuation",
            Category::Whitespace => "whitespace",
            Category::Comment => "comment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finer classification within a category, copied from the matching
/// production's metadata onto the token.
///
/// Only some productions carry one (operator and punctuation rules in
/// practice); tokens from productions without a subtype have `None`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Subtype {
    /// `+ - * / ++ --`
    Arithmetic,
    /// `&& || !`
    Logical,
    /// `& | ~ ^ << >>`
    Bitwise,
    /// `= += -= *= /=`
    Assignment,
    /// `== != < > <= >= ===`
    Comparison,
    /// `( ) [ ] { }`
    Bracket,
    /// `; : , .`
    Separator,
}

impl Subtype {
    /// Lowercase name as it appears in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Subtype::Arithmetic => "arithmetic",
            Subtype::Logical => "logical",
            Subtype::Bitwise => "bitwise",
            Subtype::Assignment => "assignment",
            Subtype::Comparison => "comparison",
            Subtype::Bracket => "bracket",
            Subtype::Separator => "separator",
        }
    }
}

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra attributes attached to a production.
///
/// The engine itself only reads `subtype`, copying it verbatim onto every
/// token the production emits.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Metadata {
    /// Sub-classification stamped onto emitted tokens.
    pub subtype: Option<Subtype>,
}

impl Metadata {
    /// Metadata carrying a subtype.
    #[inline]
    pub const fn subtype(subtype: Subtype) -> Self {
        Metadata {
            subtype: Some(subtype),
        }
    }
}
