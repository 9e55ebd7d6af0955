//! ASCII character classes used by run and single-character patterns.
//!
//! A class is a 128-bit membership mask over the ASCII range plus a negation
//! flag. Negated classes accept every non-ASCII character (so "anything but a
//! newline" spans multibyte text); positive classes are ASCII-only, matching
//! the usual `\w`/`\d`/`\s` shorthands.

/// Set of characters for pattern matching.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CharClass {
    /// Membership bit per ASCII code point.
    bits: u128,
    /// When set, membership is inverted and non-ASCII characters match.
    negated: bool,
}

impl CharClass {
    /// The empty class. Matches nothing until characters are added.
    #[inline]
    pub const fn empty() -> Self {
        CharClass {
            bits: 0,
            negated: false,
        }
    }

    /// Class containing exactly the ASCII characters of `chars`.
    ///
    /// Non-ASCII characters in `chars` are ignored; classes describe ASCII
    /// sets only (negation is the way to reach the rest of Unicode).
    pub fn of(chars: &str) -> Self {
        let mut class = CharClass::empty();
        for c in chars.chars() {
            class = class.insert(c);
        }
        class
    }

    /// Class containing the inclusive ASCII range `lo..=hi`.
    pub fn range(lo: char, hi: char) -> Self {
        let mut class = CharClass::empty();
        if lo.is_ascii() && hi.is_ascii() {
            let mut b = lo as u8;
            while b <= hi as u8 {
                class.bits |= 1u128 << b;
                if b == 127 {
                    break;
                }
                b += 1;
            }
        }
        class
    }

    /// Add a single ASCII character; non-ASCII input is ignored.
    #[must_use]
    pub fn insert(mut self, c: char) -> Self {
        if c.is_ascii() {
            self.bits |= 1u128 << (c as u8);
        }
        self
    }

    /// Union of two classes. Keeps the negation flag of `self`.
    #[must_use]
    pub fn union(mut self, other: CharClass) -> Self {
        self.bits |= other.bits;
        self
    }

    /// Invert membership. Non-ASCII characters match the inverted class.
    #[must_use]
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Membership test.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            let hit = self.bits & (1u128 << (c as u8)) != 0;
            hit != self.negated
        } else {
            self.negated
        }
    }

    /// Decimal digits `0-9`.
    pub fn digit() -> Self {
        CharClass::range('0', '9')
    }

    /// ASCII letters `A-Z a-z`.
    pub fn ascii_alpha() -> Self {
        CharClass::range('A', 'Z').union(CharClass::range('a', 'z'))
    }

    /// Word characters: letters, digits, and underscore.
    pub fn word() -> Self {
        CharClass::ascii_alpha()
            .union(CharClass::digit())
            .insert('_')
    }

    /// Whitespace: space, tab, newline, carriage return, vertical tab,
    /// form feed.
    pub fn whitespace() -> Self {
        CharClass::of(" \t\n\r\u{b}\u{c}")
    }

    /// Everything except line terminators (`\n`, `\r`).
    pub fn not_newline() -> Self {
        CharClass::of("\n\r").negate()
    }
}
