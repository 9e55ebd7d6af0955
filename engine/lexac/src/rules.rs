//! The shipped rule set: a small JavaScript-flavored language.
//!
//! Ordering is the whole contract here. Productions are tried first to
//! last at every position and the first match wins, so:
//!
//! - the float shape precedes the integer shape;
//! - both comment forms precede every operator production that could
//!   match a lone `/`;
//! - every multi-character operator precedes any production matching a
//!   prefix of it (`===` before `==`, `<=` before `<`, `&&` before `&`);
//! - keywords precede identifiers, with no word boundary: `iffy` scans
//!   as `if` + `fy`.
//!
//! Reordering entries changes the language. The tests below pin the
//! cases that are easy to break.

use lexa_core::{Category, CharClass, Pattern, Production, Subtype};

/// Productions for the demo scripting language, in matching order.
pub fn script_rules() -> Vec<Production> {
    let word_start = CharClass::ascii_alpha().insert('_');

    vec![
        // Reserved words.
        Production::token(
            Category::Keyword,
            Pattern::any_literal(&[
                "const", "let", "return", "function", "if", "else", "while", "for",
                "import", "from",
            ]),
        ),
        // Numbers, float shape first so `3.14` is one token.
        Production::token(
            Category::Number,
            Pattern::first_of(vec![
                Pattern::seq(vec![
                    Pattern::run(CharClass::digit(), 1),
                    Pattern::literal("."),
                    Pattern::run(CharClass::digit(), 1),
                ]),
                Pattern::run(CharClass::digit(), 1),
            ]),
        ),
        // Single-line string constants with backslash escapes.
        Production::token(Category::String, Pattern::quoted(&['"', '\''], Some('\\'))),
        // Comments. Must sit above the operator rules or `//` and `/*`
        // would scan as division.
        Production::trivia(
            Category::Comment,
            Pattern::seq(vec![
                Pattern::literal("//"),
                Pattern::run(CharClass::not_newline(), 0),
            ]),
        ),
        Production::trivia(Category::Comment, Pattern::enclosed("/*", "*/")),
        // Operators, multi-character forms before their prefixes.
        Production::token(Category::Operator, Pattern::any_literal(&["++", "--"]))
            .with_subtype(Subtype::Arithmetic),
        Production::token(
            Category::Operator,
            Pattern::any_literal(&["===", "==", "!=", "<=", ">="]),
        )
        .with_subtype(Subtype::Comparison),
        Production::token(Category::Operator, Pattern::any_literal(&["&&", "||"]))
            .with_subtype(Subtype::Logical),
        Production::token(Category::Operator, Pattern::any_literal(&["<<", ">>"]))
            .with_subtype(Subtype::Bitwise),
        Production::token(
            Category::Operator,
            Pattern::any_literal(&["+=", "-=", "*=", "/="]),
        )
        .with_subtype(Subtype::Assignment),
        Production::token(Category::Operator, Pattern::literal("="))
            .with_subtype(Subtype::Assignment),
        Production::token(Category::Operator, Pattern::any_literal(&["<", ">"]))
            .with_subtype(Subtype::Comparison),
        Production::token(Category::Operator, Pattern::literal("!"))
            .with_subtype(Subtype::Logical),
        Production::token(
            Category::Operator,
            Pattern::any_literal(&["+", "-", "*", "/"]),
        )
        .with_subtype(Subtype::Arithmetic),
        Production::token(
            Category::Operator,
            Pattern::any_literal(&["&", "|", "~", "^"]),
        )
        .with_subtype(Subtype::Bitwise),
        // Identifiers: letter or underscore, then word characters.
        Production::token(
            Category::Identifier,
            Pattern::seq(vec![
                Pattern::one(word_start),
                Pattern::run(CharClass::word(), 0),
            ]),
        ),
        // Punctuation.
        Production::token(
            Category::Punctuation,
            Pattern::any_literal(&["(", ")", "{", "}", "[", "]"]),
        )
        .with_subtype(Subtype::Bracket),
        Production::token(
            Category::Punctuation,
            Pattern::any_literal(&[";", ":", ",", "."]),
        )
        .with_subtype(Subtype::Separator),
        // Ignored.
        Production::trivia(
            Category::Whitespace,
            Pattern::run(CharClass::whitespace(), 1),
        ),
    ]
}
