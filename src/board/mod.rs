//! Types for tiles, digits and groups on a sudoku board, and the board itself.

mod digit;
pub mod positions;
mod tile;

pub use self::digit::Digit;
pub use self::positions::{Block, Cell, Col, House, HouseType, Row};
pub use self::tile::Tile;

use crate::bitset::Set;
use crate::consts::N_CELLS;
use crate::errors::FormatError;
use crate::helper::CellArray;
use std::fmt;
use std::str::FromStr;

/// An event announced to the listeners of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// The tile's digit occurs more than once in one of its groups.
    /// Announced by [`Board::unique_choices`] and [`Board::good_board`].
    Duplicate,
    /// The tile transitioned from open to a concrete digit.
    /// Announced by the propagation engine.
    Filled,
    /// Reserved for external consumers that want to reset display state.
    /// The core never announces this event.
    Normalify,
}

impl Event {
    /// The conventional string form of this event.
    pub fn as_str(self) -> &'static str {
        match self {
            Event::Duplicate => "duplicate",
            Event::Filled => "filled",
            Event::Normalify => "normal-ify",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A callback invoked with the announcing tile and the event that occurred.
///
/// Listeners run synchronously in registration order. They must not call back
/// into board mutation; no reentrancy contract is defined.
pub type Listener = Box<dyn FnMut(&Tile, Event)>;

/// 9 x 9 grid of sudoku tiles.
///
/// The board owns an arena of 81 [`Tile`]s. The 27 groups (9 rows, 9 columns,
/// 9 blocks) are not stored; each [`House`] knows the cells belonging to it,
/// so every tile is shared by exactly three groups without any aliasing.
///
/// A board is constructed once from 9 rows of 9 symbols, mutated only through
/// the propagation engine and read-only for validity queries.
pub struct Board {
    tiles: CellArray<Tile>,
    listeners: CellArray<Vec<Listener>>,
}

impl Board {
    /// Constructs a board from 9 rows of 9 symbols out of the alphabet
    /// `'1'..='9'` and `'.'` for an open tile.
    ///
    /// Open tiles start out with all digits possible, placed digits with the
    /// singleton of their digit.
    pub fn from_rows<I, S>(rows: I) -> Result<Board, FormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<S> = rows.into_iter().collect();
        if rows.len() != 9 {
            return Err(FormatError::WrongRowCount(rows.len()));
        }

        let mut symbols = [None; N_CELLS];
        for (row_nr, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != 9 {
                return Err(FormatError::WrongRowLength {
                    row: row_nr as u8,
                    len,
                });
            }
            for (col_nr, ch) in row.chars().enumerate() {
                symbols[row_nr * 9 + col_nr] = match ch {
                    '.' => None,
                    _ => match Digit::from_char(ch) {
                        Some(digit) => Some(digit),
                        None => {
                            return Err(FormatError::InvalidSymbol {
                                row: row_nr as u8,
                                col: col_nr as u8,
                                ch,
                            })
                        }
                    },
                };
            }
        }

        Ok(Board {
            tiles: CellArray::from_fn(|idx| Tile::new(Cell::new(idx as u8), symbols[idx])),
            listeners: CellArray::from_fn(|_| Vec::new()),
        })
    }

    /// Returns the tile at the given cell.
    pub fn tile(&self, cell: Cell) -> &Tile {
        &self.tiles[cell]
    }

    pub(crate) fn tile_mut(&mut self, cell: Cell) -> &mut Tile {
        &mut self.tiles[cell]
    }

    /// Returns an iterator over all 81 tiles, going from left to right, top to bottom.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Returns the number of open tiles.
    pub fn n_empty(&self) -> usize {
        self.tiles().filter(|tile| tile.is_empty()).count()
    }

    /// Checks whether every tile holds a digit.
    ///
    /// Note that a filled board is not necessarily a valid one,
    /// see [`Board::good_board`].
    pub fn is_filled(&self) -> bool {
        self.n_empty() == 0
    }

    /// Registers a listener for events on one tile. A tile supports any
    /// number of listeners; they are invoked in registration order.
    pub fn register(&mut self, cell: Cell, listener: impl FnMut(&Tile, Event) + 'static) {
        self.listeners[cell].push(Box::new(listener));
    }

    /// Announces an event to every listener registered for the given cell.
    ///
    /// The core announces only [`Event::Duplicate`] and [`Event::Filled`];
    /// external consumers may use this to announce [`Event::Normalify`].
    pub fn announce(&mut self, cell: Cell, event: Event) {
        let Board { tiles, listeners } = self;
        let tile = &tiles[cell];
        for listener in listeners[cell].iter_mut() {
            listener(tile, event);
        }
    }

    pub(crate) fn place(&mut self, cell: Cell, digit: Digit) {
        self.tiles[cell].fill(digit);
        self.announce(cell, Event::Filled);
    }

    /// Checks one group of 9 tiles for unique symbols.
    ///
    /// Returns `true` iff every placed digit in the group occurs exactly once.
    /// Every tile whose digit is duplicated within the group is announced a
    /// [`Event::Duplicate`], not just the later occurrences. The result does
    /// not depend on the order of the group's tiles.
    pub fn unique_choices(&mut self, house: House) -> bool {
        let mut seen = Set::NONE;
        let mut dups = Set::NONE;
        for cell in house.cells() {
            if let Some(digit) = self.tiles[cell].symbol() {
                dups |= seen & digit.as_set();
                seen |= digit;
            }
        }
        if dups.is_empty() {
            return true;
        }
        for cell in house.cells() {
            match self.tiles[cell].symbol() {
                Some(digit) if dups.contains(digit) => self.announce(cell, Event::Duplicate),
                _ => (),
            }
        }
        false
    }

    /// Checks all 27 groups for duplicate digits.
    ///
    /// All groups are visited even after a failure, so every duplicate is
    /// announced. A tile in several bad groups receives one event per group;
    /// listeners are responsible for not double-reporting.
    ///
    /// May be invoked at any time, not only after solving.
    pub fn good_board(&mut self) -> bool {
        let mut ok = true;
        for house in House::all() {
            ok &= self.unique_choices(house);
        }
        ok
    }
}

impl FromStr for Board {
    type Err = FormatError;

    /// Parses a board from 9 lines of 9 symbols each.
    /// Whitespace surrounding each line is ignored.
    fn from_str(s: &str) -> Result<Board, FormatError> {
        Board::from_rows(s.lines().map(str::trim))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for tile in self.tiles() {
            write!(f, "{}", tile.to_char())?;
            if tile.col().get() == 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Board")
            .field("tiles", &self.tiles)
            .finish_non_exhaustive()
    }
}
