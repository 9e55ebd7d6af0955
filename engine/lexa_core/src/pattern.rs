//! Anchored pattern combinators for production matching.
//!
//! A [`Pattern`] answers one question: how many bytes does it match at the
//! very start of a string slice? Productions carry patterns; the analyzer
//! asks the question once per production per cursor position and never
//! searches forward.
//!
//! # Matching model
//!
//! - All matching is anchored. There is no scanning for a later match start.
//! - [`Pattern::AnyLiteral`] and [`Pattern::FirstOf`] are ordered: the first
//!   alternative that matches wins, even when a later one would match more.
//! - [`Pattern::Run`] is greedy and never gives characters back, so a
//!   [`Pattern::Seq`] does not backtrack. Token shapes do not need
//!   backtracking; rule sets that would are not supported.
//! - A pattern may match zero bytes (for example `Run` with `min: 0` on its
//!   own). The analyzer treats a zero-width match at the top level of a
//!   production as a configuration error.

use crate::CharClass;

use memchr::memmem;
use std::fmt;

/// Matcher function for [`Pattern::Custom`].
///
/// Receives the unconsumed rest of the source and returns the matched prefix
/// length in bytes, or `None` for no match. The returned length must lie on a
/// character boundary of the input.
pub type MatchFn = fn(&str) -> Option<usize>;

/// Caller-supplied matcher with a display name.
#[derive(Clone, Copy)]
pub struct CustomPattern {
    name: &'static str,
    matcher: MatchFn,
}

impl CustomPattern {
    /// Wrap a matcher function. The name appears in `Debug` output only.
    pub const fn new(name: &'static str, matcher: MatchFn) -> Self {
        CustomPattern { name, matcher }
    }

    /// The display name given at construction.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for CustomPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomPattern")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Regular-expression-like matcher built from combinators.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Exact text.
    Literal(Box<str>),
    /// Ordered literal alternatives; the first that matches wins.
    AnyLiteral(Vec<Box<str>>),
    /// Exactly one character from the class.
    One(CharClass),
    /// Greedy maximal run of class characters, at least `min` of them.
    Run {
        class: CharClass,
        /// Minimum number of characters for the run to count as a match.
        min: u32,
    },
    /// Concatenation. Every element must match in turn; no backtracking.
    Seq(Vec<Pattern>),
    /// Ordered alternation over sub-patterns.
    FirstOf(Vec<Pattern>),
    /// One of the quote characters, a single-line body in which the escape
    /// character protects the following character, then the same quote again.
    ///
    /// The body may not contain a raw `\n` or `\r`, escaped or not; an
    /// unterminated literal is no match at all.
    Quoted {
        quotes: Box<[char]>,
        escape: Option<char>,
    },
    /// The opening literal through the first occurrence of the closing
    /// literal, inclusive. An unterminated enclosure is no match at all.
    Enclosed { open: Box<str>, close: Box<str> },
    /// Caller-supplied matcher.
    Custom(CustomPattern),
}

impl Pattern {
    /// Exact-text pattern.
    pub fn literal(text: &str) -> Self {
        Pattern::Literal(text.into())
    }

    /// Ordered literal alternation.
    pub fn any_literal(alternatives: &[&str]) -> Self {
        Pattern::AnyLiteral(alternatives.iter().map(|a| Box::from(*a)).collect())
    }

    /// Single character from a class.
    pub const fn one(class: CharClass) -> Self {
        Pattern::One(class)
    }

    /// Greedy run of at least `min` class characters.
    pub const fn run(class: CharClass, min: u32) -> Self {
        Pattern::Run { class, min }
    }

    /// Concatenation.
    pub fn seq(parts: Vec<Pattern>) -> Self {
        Pattern::Seq(parts)
    }

    /// Ordered alternation.
    pub fn first_of(alternatives: Vec<Pattern>) -> Self {
        Pattern::FirstOf(alternatives)
    }

    /// Quote-delimited single-line literal.
    pub fn quoted(quotes: &[char], escape: Option<char>) -> Self {
        Pattern::Quoted {
            quotes: quotes.into(),
            escape,
        }
    }

    /// Delimited region closed by the first occurrence of `close`.
    pub fn enclosed(open: &str, close: &str) -> Self {
        Pattern::Enclosed {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Caller-supplied matcher function.
    pub const fn custom(name: &'static str, matcher: MatchFn) -> Self {
        Pattern::Custom(CustomPattern::new(name, matcher))
    }

    /// Length in bytes of the match anchored at the start of `rest`, or
    /// `None` if this pattern does not match there.
    pub fn match_prefix(&self, rest: &str) -> Option<usize> {
        match self {
            Pattern::Literal(text) => rest.starts_with(text.as_ref()).then_some(text.len()),
            Pattern::AnyLiteral(alternatives) => alternatives
                .iter()
                .find(|alt| rest.starts_with(alt.as_ref()))
                .map(|alt| alt.len()),
            Pattern::One(class) => {
                let c = rest.chars().next()?;
                class.contains(c).then_some(c.len_utf8())
            }
            Pattern::Run { class, min } => {
                let mut len = 0;
                let mut count = 0usize;
                for c in rest.chars() {
                    if !class.contains(c) {
                        break;
                    }
                    len += c.len_utf8();
                    count += 1;
                }
                (count >= *min as usize).then_some(len)
            }
            Pattern::Seq(parts) => {
                let mut len = 0;
                for part in parts {
                    len += part.match_prefix(&rest[len..])?;
                }
                Some(len)
            }
            Pattern::FirstOf(alternatives) => {
                alternatives.iter().find_map(|alt| alt.match_prefix(rest))
            }
            Pattern::Quoted { quotes, escape } => match_quoted(rest, quotes, *escape),
            Pattern::Enclosed { open, close } => match_enclosed(rest, open, close),
            Pattern::Custom(custom) => (custom.matcher)(rest),
        }
    }

    /// Anchored match at byte offset `at` of `text`.
    ///
    /// # Panics
    /// Panics if `at` is not a character boundary of `text`.
    #[inline]
    pub fn try_match_at(&self, text: &str, at: usize) -> Option<usize> {
        self.match_prefix(&text[at..])
    }
}

/// Quoted-literal matcher.
///
/// Mirrors the lazy close of the usual `"(\\.|[^\\"])*?"` idiom: the first
/// unescaped occurrence of the opening quote character terminates the
/// literal. Line terminators end the attempt without a match, even directly
/// after the escape character.
fn match_quoted(rest: &str, quotes: &[char], escape: Option<char>) -> Option<usize> {
    let mut chars = rest.chars();
    let quote = chars.next().filter(|c| quotes.contains(c))?;
    let mut len = quote.len_utf8();

    while let Some(c) = chars.next() {
        if c == '\n' || c == '\r' {
            return None;
        }
        len += c.len_utf8();
        if c == quote {
            return Some(len);
        }
        if Some(c) == escape {
            let escaped = chars.next()?;
            if escaped == '\n' || escaped == '\r' {
                return None;
            }
            len += escaped.len_utf8();
        }
    }
    // Ran out of input before the closing quote.
    None
}

/// Enclosed-region matcher. The close search uses `memmem`, so the region
/// ends at the first close occurrence (lazy, never the last).
fn match_enclosed(rest: &str, open: &str, close: &str) -> Option<usize> {
    if !rest.starts_with(open) {
        return None;
    }
    let body = &rest[open.len()..];
    let at = memmem::find(body.as_bytes(), close.as_bytes())?;
    Some(open.len() + at + close.len())
}
