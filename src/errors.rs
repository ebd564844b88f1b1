#[cfg(doc)]
use crate::Board;

/// Error for [`Board::from_rows`] and the `FromStr` impl of [`Board`].
///
/// Malformed input is fatal: no partially built board is observable.
/// A well-formed board that merely violates the sudoku rules is *not* an
/// error, it is reported through `Board::good_board` and duplicate events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum FormatError {
    /// The input does not consist of exactly 9 rows.
    #[error("expected 9 rows, found {0}")]
    WrongRowCount(usize),
    /// A row does not consist of exactly 9 symbols.
    #[error("row {row} contains {len} symbols instead of 9")]
    WrongRowLength {
        /// Row index from 0..=8, topmost row is 0
        row: u8,
        /// Number of symbols found in the row
        len: usize,
    },
    /// A character outside the alphabet `1..=9`, `'.'` was encountered.
    #[error("invalid sudoku symbol {ch:?} at row {row}, column {col}")]
    InvalidSymbol {
        /// Row index from 0..=8, topmost row is 0
        row: u8,
        /// Column index from 0..=8, leftmost column is 0
        col: u8,
        /// The offending character
        ch: char,
    },
}
