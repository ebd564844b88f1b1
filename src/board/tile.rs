use crate::bitset::Set;
use crate::board::{Block, Cell, Col, Digit, Row};

/// One tile of the board: a position together with its current symbol
/// and the set of digits still possible there.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    cell: Cell,
    symbol: Option<Digit>,
    possible: Set<Digit>,
}

impl Tile {
    pub(crate) fn new(cell: Cell, symbol: Option<Digit>) -> Self {
        // open tiles can hold anything until propagation narrows them down
        let possible = match symbol {
            Some(digit) => digit.as_set(),
            None => Set::ALL,
        };
        Tile {
            cell,
            symbol,
            possible,
        }
    }

    /// Returns the position of this tile.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Returns the row of this tile.
    pub fn row(&self) -> Row {
        self.cell.row()
    }

    /// Returns the column of this tile.
    pub fn col(&self) -> Col {
        self.cell.col()
    }

    /// Returns the block of this tile.
    pub fn block(&self) -> Block {
        self.cell.block()
    }

    /// Returns the digit placed on this tile, or `None` if the tile is open.
    pub fn symbol(&self) -> Option<Digit> {
        self.symbol
    }

    /// Checks whether no digit is placed on this tile.
    pub fn is_empty(&self) -> bool {
        self.symbol.is_none()
    }

    /// The set of digits not yet ruled out for this tile.
    ///
    /// Only meaningful while the tile is open. A filled tile reports the
    /// singleton set of its digit.
    pub fn possible(&self) -> Set<Digit> {
        self.possible
    }

    /// Returns the tile's symbol as a character, `'.'` for an open tile.
    pub fn to_char(&self) -> char {
        match self.symbol {
            Some(digit) => digit.to_char(),
            None => '.',
        }
    }

    pub(crate) fn remove_possibilities(&mut self, digits: Set<Digit>) {
        if self.symbol.is_none() {
            self.possible.remove(digits);
        }
    }

    pub(crate) fn fill(&mut self, digit: Digit) {
        debug_assert!(self.symbol.is_none());
        self.symbol = Some(digit);
        self.possible = digit.as_set();
    }
}
