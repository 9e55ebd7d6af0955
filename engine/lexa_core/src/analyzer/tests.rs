use super::{scan, LexicalAnalyzer, ScanOutcome};
use crate::{Category, CharClass, Pattern, Production, ScanErrorKind, Subtype};

use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Small JavaScript-flavored rule set exercising every production shape.
fn demo_rules() -> Vec<Production> {
    vec![
        Production::token(Category::Keyword, Pattern::any_literal(&["let", "if", "while"])),
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
        Production::trivia(
            Category::Comment,
            Pattern::seq(vec![
                Pattern::literal("//"),
                Pattern::run(CharClass::not_newline(), 0),
            ]),
        ),
        Production::token(Category::Operator, Pattern::literal("=="))
            .with_subtype(Subtype::Comparison),
        Production::token(Category::Operator, Pattern::literal("="))
            .with_subtype(Subtype::Assignment),
        Production::token(Category::Operator, Pattern::any_literal(&["+", "-"]))
            .with_subtype(Subtype::Arithmetic),
        Production::token(
            Category::Identifier,
            Pattern::seq(vec![
                Pattern::one(CharClass::ascii_alpha().insert('_')),
                Pattern::run(CharClass::word(), 0),
            ]),
        ),
        Production::token(
            Category::Punctuation,
            Pattern::any_literal(&["(", ")", "[", "]", "{", "}"]),
        )
        .with_subtype(Subtype::Bracket),
        Production::token(Category::Punctuation, Pattern::any_literal(&[";", ","]))
            .with_subtype(Subtype::Separator),
        Production::trivia(Category::Whitespace, Pattern::run(CharClass::whitespace(), 1)),
    ]
}

fn scan_clean(source: &str) -> ScanOutcome {
    let outcome = scan(source, &demo_rules());
    assert!(
        outcome.is_clean(),
        "expected clean scan of {source:?}, got {:?}",
        outcome.error
    );
    outcome
}

fn lexemes(outcome: &ScanOutcome) -> Vec<&str> {
    outcome
        .tokens
        .iter()
        .map(|t| outcome.symbols.resolve(t.symbol))
        .collect()
}

// === End of input ===

#[test]
fn empty_source_ends_immediately() {
    let rules = demo_rules();
    let mut analyzer = LexicalAnalyzer::new("", &rules);
    assert_eq!(analyzer.next_token(), Ok(None));
    assert_eq!(analyzer.next_token(), Ok(None));
}

#[test]
fn trailing_trivia_ends_cleanly() {
    let outcome = scan_clean("let   \n// tail comment");
    assert_eq!(lexemes(&outcome), vec!["let"]);
}

#[test]
fn trivia_only_source_yields_no_tokens() {
    let outcome = scan_clean("  \t\n// nothing here\n");
    assert!(outcome.tokens.is_empty());
    assert!(outcome.symbols.is_empty());
}

// === Classification ===

#[test]
fn classifies_a_simple_statement() {
    let outcome = scan_clean("let x = 5;");
    let view: Vec<_> = outcome
        .tokens
        .iter()
        .map(|t| {
            (
                t.category,
                t.subtype,
                t.span.start,
                t.span.end,
                outcome.symbols.resolve(t.symbol),
            )
        })
        .collect();
    assert_eq!(
        view,
        vec![
            (Category::Keyword, None, 0, 3, "let"),
            (Category::Identifier, None, 4, 5, "x"),
            (Category::Operator, Some(Subtype::Assignment), 6, 7, "="),
            (Category::Number, None, 8, 9, "5"),
            (Category::Punctuation, Some(Subtype::Separator), 9, 10, ";"),
        ]
    );
}

#[test]
fn float_shape_is_tried_before_integer() {
    let outcome = scan_clean("3.14 42");
    assert_eq!(lexemes(&outcome), vec!["3.14", "42"]);
    assert_eq!(outcome.tokens[0].category, Category::Number);
}

#[test]
fn comment_runs_to_end_of_line() {
    let outcome = scan_clean("let // rest of line\nx");
    assert_eq!(lexemes(&outcome), vec!["let", "x"]);
    let x = outcome.tokens[1];
    assert_eq!(x.span.start, 20);
    assert_eq!(outcome.symbols.resolve(x.symbol), "x");
}

// === Ordering ===

#[test]
fn first_match_wins_by_listed_order_not_length() {
    // With the single-character rule listed first, `==` scans as two
    // assignment operators. Ordering is the rule set author's contract.
    let eq_first = vec![
        Production::token(Category::Operator, Pattern::literal("="))
            .with_subtype(Subtype::Assignment),
        Production::token(Category::Operator, Pattern::literal("=="))
            .with_subtype(Subtype::Comparison),
    ];
    let outcome = scan("==", &eq_first);
    assert!(outcome.is_clean());
    let subtypes: Vec<_> = outcome.tokens.iter().map(|t| t.subtype).collect();
    assert_eq!(
        subtypes,
        vec![Some(Subtype::Assignment), Some(Subtype::Assignment)]
    );

    // The demo rules list `==` first and get one comparison token.
    let outcome = scan_clean("==");
    assert_eq!(outcome.tokens.len(), 1);
    assert_eq!(outcome.tokens[0].subtype, Some(Subtype::Comparison));
}

#[test]
fn keyword_rule_has_no_word_boundary() {
    // `letx` is scanned as the keyword `let` followed by the identifier `x`;
    // the keyword production matches first and matching is anchored, not
    // boundary-aware.
    let outcome = scan_clean("letx");
    let view: Vec<_> = outcome
        .tokens
        .iter()
        .map(|t| (t.category, outcome.symbols.resolve(t.symbol)))
        .collect();
    assert_eq!(
        view,
        vec![(Category::Keyword, "let"), (Category::Identifier, "x")]
    );
}

// === Fail-fast errors ===

#[test]
fn unexpected_character_reports_offset_and_char() {
    let outcome = scan("let \u{a3}5", &demo_rules());
    let err = outcome.error.clone().unwrap();
    assert_eq!(err.offset, 4);
    assert_eq!(err.kind, ScanErrorKind::UnexpectedCharacter { found: '\u{a3}' });
    // Tokens collected before the failure are preserved.
    assert_eq!(lexemes(&outcome), vec!["let"]);
}

#[test]
fn error_does_not_advance_the_cursor() {
    let rules = demo_rules();
    let mut analyzer = LexicalAnalyzer::new("x @", &rules);
    assert!(matches!(analyzer.next_token(), Ok(Some(_))));

    let first = analyzer.next_token();
    let second = analyzer.next_token();
    assert!(first.is_err());
    assert_eq!(first, second);
    assert_eq!(analyzer.offset(), 2);
}

#[test]
fn zero_width_match_is_a_configuration_error() {
    let rules = vec![Production::token(
        Category::Number,
        Pattern::run(CharClass::digit(), 0),
    )];
    let outcome = scan("abc", &rules);
    let err = outcome.error.unwrap();
    assert_eq!(err.offset, 0);
    assert_eq!(
        err.kind,
        ScanErrorKind::ZeroWidthMatch {
            category: Category::Number
        }
    );
}

#[test]
fn zero_width_trivia_is_caught_before_looping() {
    let rules = vec![Production::trivia(
        Category::Whitespace,
        Pattern::run(CharClass::whitespace(), 0),
    )];
    let outcome = scan("x", &rules);
    let err = outcome.error.unwrap();
    assert_eq!(
        err.kind,
        ScanErrorKind::ZeroWidthMatch {
            category: Category::Whitespace
        }
    );
}

// === Interning ===

#[test]
fn repeated_lexemes_share_one_symbol() {
    let outcome = scan_clean("x = x + x");
    let xs: Vec<_> = outcome
        .tokens
        .iter()
        .filter(|t| t.category == Category::Identifier)
        .map(|t| t.symbol)
        .collect();
    assert_eq!(xs.len(), 3);
    assert!(xs.iter().all(|&s| s == xs[0]));
    assert_eq!(outcome.symbols.len(), 3); // "x", "=", "+"
}

#[test]
fn symbols_appear_in_discovery_order() {
    let outcome = scan_clean("x = x + x");
    let discovered: Vec<_> = outcome.symbols.iter().map(|(_, text)| text).collect();
    assert_eq!(discovered, vec!["x", "=", "+"]);
}

#[test]
fn trivia_is_never_interned() {
    let outcome = scan_clean("x  \t y // comment");
    assert_eq!(outcome.symbols.get(" "), None);
    assert_eq!(outcome.symbols.get("  \t "), None);
    let discovered: Vec<_> = outcome.symbols.iter().map(|(_, text)| text).collect();
    assert_eq!(discovered, vec!["x", "y"]);
}

// === Spans ===

#[test]
fn spans_slice_the_source_back_to_the_lexeme() {
    let source = "let total = 3.14 + offset;";
    let outcome = scan_clean(source);
    for token in &outcome.tokens {
        assert_eq!(
            &source[token.span.to_range()],
            outcome.symbols.resolve(token.symbol),
            "span {:?} does not slice its lexeme",
            token.span
        );
    }
}

#[test]
fn occurrence_index_is_the_span_start() {
    let outcome = scan_clean("xx x");
    let offsets: Vec<_> = outcome.tokens.iter().map(|t| t.offset()).collect();
    assert_eq!(offsets, vec![0, 3]);
}

// === Properties ===

proptest! {
    #[test]
    fn token_lexemes_reassemble_the_non_trivia_input(input in "[a-z0-9 ]{0,48}") {
        let rules = demo_rules();
        let outcome = scan(&input, &rules);
        prop_assert!(outcome.is_clean());
        let rebuilt: String = outcome
            .tokens
            .iter()
            .map(|t| outcome.symbols.resolve(t.symbol))
            .collect();
        let expected: String = input.chars().filter(|c| *c != ' ').collect();
        prop_assert_eq!(rebuilt, expected);
    }

    #[test]
    fn token_spans_are_ordered_and_disjoint(input in "[a-z0-9 =+;]{0,48}") {
        let rules = demo_rules();
        let outcome = scan(&input, &rules);
        let mut last_end = 0u32;
        for token in &outcome.tokens {
            prop_assert!(token.span.start >= last_end);
            prop_assert!(token.span.start < token.span.end);
            last_end = token.span.end;
        }
    }

    #[test]
    fn rescanning_the_same_snapshot_is_deterministic(input in "[a-z0-9 =+;(){}]{0,48}") {
        let rules = demo_rules();
        let first = scan(&input, &rules);
        let second = scan(&input, &rules);
        prop_assert_eq!(first.tokens, second.tokens);
        prop_assert_eq!(first.error, second.error);
        let a: Vec<_> = first.symbols.iter().map(|(_, t)| t.to_owned()).collect();
        let b: Vec<_> = second.symbols.iter().map(|(_, t)| t.to_owned()).collect();
        prop_assert_eq!(a, b);
    }
}
