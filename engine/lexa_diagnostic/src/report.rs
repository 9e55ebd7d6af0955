//! Engine errors unified and paired with source positions.
//!
//! Scanning and bracket validation report errors independently, each
//! carrying only a byte offset. [`position_errors`] merges one snapshot's
//! worth of them into a single presentation-ready list, scan error first,
//! every entry resolved to a row and column through one [`PositionMap`].

use std::error::Error;
use std::fmt;

use lexa_core::{BracketError, ScanError};

use crate::position::{Position, PositionMap};

/// Any error the engine can report for a snapshot, unified for display.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum EngineError {
    /// Scanning stopped before the end of input.
    Scan(ScanError),
    /// A bracket pair failed stack validation.
    Bracket(BracketError),
}

impl EngineError {
    /// Byte offset the error points at.
    pub fn offset(&self) -> u32 {
        match self {
            EngineError::Scan(e) => e.offset,
            EngineError::Bracket(e) => e.offset,
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Scan(e) => e.fmt(f),
            EngineError::Bracket(e) => e.fmt(f),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EngineError::Scan(e) => Some(e),
            EngineError::Bracket(e) => Some(e),
        }
    }
}

impl From<ScanError> for EngineError {
    fn from(error: ScanError) -> Self {
        EngineError::Scan(error)
    }
}

impl From<BracketError> for EngineError {
    fn from(error: BracketError) -> Self {
        EngineError::Bracket(error)
    }
}

/// An engine error resolved to a row and column.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionedError {
    pub error: EngineError,
    pub position: Position,
}

impl fmt::Display for PositionedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.error)
    }
}

impl Error for PositionedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

/// Resolves every error for one snapshot to a row and column.
///
/// The scan error, when present, is listed first; bracket errors follow
/// in the order the validator reported them. No error is dropped. All
/// positions are resolved through one [`PositionMap`] built over
/// `source`, which must be the text the errors were produced from.
pub fn position_errors(
    source: &str,
    scan_error: Option<ScanError>,
    bracket_errors: Vec<BracketError>,
) -> Vec<PositionedError> {
    let map = PositionMap::build(source);
    let mut errors =
        Vec::with_capacity(usize::from(scan_error.is_some()) + bracket_errors.len());

    if let Some(error) = scan_error {
        errors.push(PositionedError {
            position: map.locate(error.offset),
            error: EngineError::Scan(error),
        });
    }
    for error in bracket_errors {
        errors.push(PositionedError {
            position: map.locate(error.offset),
            error: EngineError::Bracket(error),
        });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scan_error_is_listed_first() {
        let scan = ScanError::unexpected_character(4, '@');
        let brackets = vec![
            BracketError::unclosed_opening(0, '('),
            BracketError::unexpected_closing(2, ']'),
        ];
        let errors = position_errors("(a]\n@", Some(scan.clone()), brackets);

        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].error, EngineError::Scan(scan));
        assert_eq!(errors[1].error.offset(), 0);
        assert_eq!(errors[2].error.offset(), 2);
    }

    #[test]
    fn test_positions_resolve_against_the_source() {
        let source = "let (\n@";
        let errors = position_errors(
            source,
            Some(ScanError::unexpected_character(6, '@')),
            vec![BracketError::unclosed_opening(4, '(')],
        );

        assert_eq!(errors[0].position, Position::new(2, 0));
        assert_eq!(errors[1].position, Position::new(1, 4));
    }

    #[test]
    fn test_no_errors_means_an_empty_list() {
        assert_eq!(position_errors("fine", None, Vec::new()), vec![]);
    }

    #[test]
    fn test_display_prefixes_row_and_column() {
        let errors = position_errors(
            "x\n@",
            Some(ScanError::unexpected_character(2, '@')),
            Vec::new(),
        );
        assert_eq!(
            errors[0].to_string(),
            "2:0: unexpected character `@` at offset 2"
        );
    }

    #[test]
    fn test_bracket_display_carries_through() {
        let errors = position_errors(
            ")",
            None,
            vec![BracketError::unexpected_closing(0, ')')],
        );
        assert_eq!(
            errors[0].to_string(),
            "1:0: unexpected closing bracket `)` at offset 0"
        );
    }

    #[test]
    fn test_conversions_into_engine_error() {
        let scan: EngineError = ScanError::unexpected_character(1, 'b').into();
        let bracket: EngineError = BracketError::unclosed_opening(7, '{').into();
        assert_eq!(scan.offset(), 1);
        assert_eq!(bracket.offset(), 7);
    }
}
