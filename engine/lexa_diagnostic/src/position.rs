//! Row and column resolution for byte offsets.
//!
//! Scan and bracket errors carry flat byte offsets; presentation wants
//! rows and columns. [`locate`] answers a single query with a linear
//! scan, while [`PositionMap`] pre-computes line starts once for
//! O(log L) lookups when positioning a batch of errors against the same
//! snapshot. The two are required to agree on every offset.
//!
//! Rows are 1-based. Columns are 0-based byte distances from the line
//! start, so a multi-byte character widens the column by its byte
//! width, not its display width.

use std::fmt;

/// A resolved source position.
///
/// `row` is 1-based; `column` is the 0-based byte distance from the
/// start of the row. On the first row the column equals the absolute
/// offset.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(row: u32, column: u32) -> Self {
        Position { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// Resolves one byte offset with a linear scan over `source`.
///
/// The row is one more than the number of `\n` bytes strictly before
/// `offset`, so a newline itself still belongs to the row it ends.
///
/// Note: for repeated lookups on the same source, build a
/// [`PositionMap`] instead.
pub fn locate(source: &str, offset: u32) -> Position {
    let target = offset as usize;
    let mut row = 1u32;
    let mut line_start = 0usize;

    for (i, &byte) in source.as_bytes().iter().enumerate() {
        if i >= target {
            break;
        }
        if byte == b'\n' {
            row += 1;
            line_start = i + 1;
        }
    }

    Position {
        row,
        column: (target - line_start) as u32,
    }
}

/// Pre-computed line start table for efficient position lookup.
///
/// Scans the source once to find all newlines, O(n) construction for
/// O(log L) lookups where L is the number of rows. Worth it whenever
/// more than one error is being positioned against the same snapshot.
#[derive(Clone, Debug, Default)]
pub struct PositionMap {
    /// Byte offset of each row start. `starts[0]` is always 0; every
    /// later entry is the byte after a `\n`.
    starts: Vec<u32>,
}

impl PositionMap {
    /// Build a position map from source text.
    pub fn build(source: &str) -> Self {
        let mut starts = vec![0u32];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                starts.push((i + 1) as u32);
            }
        }
        PositionMap { starts }
    }

    /// Resolves `offset` against the table.
    ///
    /// Agrees with [`locate`] on the source this table was built from,
    /// for every offset.
    pub fn locate(&self, offset: u32) -> Position {
        // Largest row start <= offset.
        let row_idx = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        let row_start = self.starts.get(row_idx).copied().unwrap_or(0);

        Position {
            row: (row_idx as u32) + 1,
            column: offset - row_start,
        }
    }

    /// Byte offset where 1-based `row` starts, if the row exists.
    pub fn row_start(&self, row: u32) -> Option<u32> {
        if row == 0 {
            return None;
        }
        self.starts.get((row - 1) as usize).copied()
    }

    /// Number of rows in the source. An empty source still has one row.
    pub fn row_count(&self) -> usize {
        self.starts.len()
    }
}
