#![warn(missing_docs)]
//! Sudoku validity checking and singles propagation
//!
//! ## Overview
//!
//! This library loads a 9x9 sudoku grid, detects rule violations (duplicate
//! digits in a row, column or block) and fills in digits that are forced by
//! the two deterministic propagation rules, *naked single* and *hidden
//! single*. It does not perform backtracking search; a board the two rules
//! cannot finish is left partially solved and reported as such.
//!
//! Interested consumers (renderers, loggers) can register listeners on
//! individual tiles and are notified of `"duplicate"` and `"filled"` events
//! as checking and solving progress.
//!
//! ## Example
//!
//! ```
//! use sudoku_singles::{Board, Propagator};
//!
//! let rows = [
//!     "5.4678912",
//!     "672195348",
//!     "198342567",
//!     "859761423",
//!     "4268.3791",
//!     "713924856",
//!     "961537284",
//!     "287419635",
//!     "345286179",
//! ];
//!
//! let mut board = Board::from_rows(rows).unwrap();
//! assert!(board.good_board()); // no duplicates
//!
//! let n_placed = Propagator::new(&mut board).solve();
//! assert_eq!(n_placed, 2);
//! assert!(board.is_filled());
//! println!("{}", board);
//! ```

mod bitset;
pub mod board;
mod consts;
mod errors;
mod helper;
pub mod propagate;

pub use crate::bitset::{Set, SetElement};
pub use crate::board::{Board, Cell, Digit, Event, House, Tile};
pub use crate::errors::FormatError;
pub use crate::propagate::Propagator;
