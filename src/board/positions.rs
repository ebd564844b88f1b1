//! Positions on the board: cells and the three kinds of groups containing them.

use crate::bitset::Set;
use crate::consts::*;

#[inline(always)]
pub(crate) fn row(cell: u8) -> u8 {
    cell / 9
}
#[inline(always)]
pub(crate) fn col(cell: u8) -> u8 {
    cell % 9
}
#[inline(always)]
pub(crate) fn block(cell: u8) -> u8 {
    row(cell) / 3 * 3 + col(cell) / 3
}

macro_rules! define_types(
    ($( $(#[$attr:meta])* $name:ident : $limit:expr ),* $(,)*) => {
        $(
            $(#[$attr])*
            #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
            pub struct $name(u8);

            impl $name {
                /// Constructs a new instance.
                ///
                /// # Panic (debug mode)
                /// The number must be below the number of possible instances.
                pub fn new(num: u8) -> Self {
                    debug_assert!(num < $limit);
                    $name(num)
                }

                /// Checked constructor, returns `None` for out of range numbers.
                pub fn new_checked(num: u8) -> Option<Self> {
                    if num < $limit {
                        Some($name(num))
                    } else {
                        None
                    }
                }

                /// Returns the index contained within.
                pub fn get(self) -> u8 {
                    self.0
                }

                /// Returns the index contained within as `usize`.
                pub fn as_index(self) -> usize {
                    self.0 as _
                }

                /// Returns an iterator over all instances.
                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$limit).map(Self::new)
                }
            }
        )*
    };
);

define_types!(
    /// One of the 81 positions on the board, numbered from left to right,
    /// top to bottom.
    Cell: 81,
    /// One of the 9 rows, topmost row is 0.
    Row: 9,
    /// One of the 9 columns, leftmost column is 0.
    Col: 9,
    /// One of the 9 3x3 blocks, numbered from left to right, top to bottom.
    Block: 9,
    /// One of the 27 groups of 9 cells that must contain every digit exactly
    /// once: rows 0..=8, columns 9..=17, blocks 18..=26.
    House: 27,
);

impl Cell {
    /// Constructs the cell at the given position.
    pub fn from_coords(row: Row, col: Col) -> Self {
        Cell::new(row.get() * 9 + col.get())
    }

    /// Returns the row of this cell.
    #[inline]
    pub fn row(self) -> Row {
        Row::new(row(self.0))
    }

    /// Returns the column of this cell.
    #[inline]
    pub fn col(self) -> Col {
        Col::new(col(self.0))
    }

    /// Returns the block of this cell, numbered from left to right, top to bottom.
    #[inline]
    pub fn block(self) -> Block {
        Block::new(block(self.0))
    }

    /// Returns the three groups this cell belongs to: its row, column and block.
    pub fn houses(self) -> [House; 3] {
        [
            House::new(row(self.0)),
            House::new(COL_OFFSET + col(self.0)),
            House::new(BLOCK_OFFSET + block(self.0)),
        ]
    }
}

/// One of the three kinds of [`House`]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[allow(missing_docs)]
pub enum HouseType {
    Row(Row),
    Col(Col),
    Block(Block),
}

impl House {
    /// Resolves which kind of group this house is.
    ///
    /// Houses are numbered in construction order: 9 rows, then 9 columns, then 9 blocks.
    pub fn categorize(self) -> HouseType {
        debug_assert!(self.0 < N_HOUSES as u8);
        match self.0 {
            0..=8 => HouseType::Row(Row::new(self.0)),
            9..=17 => HouseType::Col(Col::new(self.0 - COL_OFFSET)),
            _ => HouseType::Block(Block::new(self.0 - BLOCK_OFFSET)),
        }
    }
}

impl From<Row> for House {
    fn from(row: Row) -> Self {
        House::new(row.get())
    }
}

impl From<Col> for House {
    fn from(col: Col) -> Self {
        House::new(COL_OFFSET + col.get())
    }
}

impl From<Block> for House {
    fn from(block: Block) -> Self {
        House::new(BLOCK_OFFSET + block.get())
    }
}

macro_rules! into_cells {
    ( $( $name:ident => |$arg:ident| $code:block );* $(;)* ) => {
        $(
            impl $name {
                /// The set of the 9 cells making up this group,
                /// in ascending cell order.
                pub fn cells(self) -> Set<Cell> {
                    let $arg = self;
                    Set($code)
                }
            }
        )*
    };
}

// the closures here aren't actually closures, they just introduce
// the variables to be used in the code blocks for macro hygiene reasons
into_cells!(
    Row => |row| { 0o777 << (9 * row.0) };
    Col => |col| { 0o_001_001_001___001_001_001___001_001_001 << col.0 };
    Block => |block| {
        let band = block.0 / 3;
        let stack = block.0 % 3;
        0o007_007_007 << (band * 27 + stack * 3)
    };
    House => |house| {
        use self::HouseType::*;
        match house.categorize() {
            Row(row) => row.cells().0,
            Col(col) => col.cells().0,
            Block(block) => block.cells().0,
        }
    };
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_indexing() {
        assert_eq!(Cell::new(0).block(), Block::new(0));
        assert_eq!(Cell::new(5).block(), Block::new(1));
        assert_eq!(Cell::new(30).block(), Block::new(4));
        assert_eq!(Cell::new(80).block(), Block::new(8));
    }

    #[test]
    fn every_house_has_9_cells() {
        for house in House::all() {
            assert_eq!(house.cells().len(), 9);
        }
    }

    #[test]
    fn every_cell_in_exactly_3_houses() {
        for cell in Cell::all() {
            let n_containing = House::all()
                .filter(|house| house.cells().contains(cell))
                .count();
            assert_eq!(n_containing, 3);
            for house in cell.houses() {
                assert!(house.cells().contains(cell));
            }
        }
    }

    #[test]
    fn block_cells_are_row_major_within_block() {
        let cells: Vec<u8> = Block::new(4).cells().into_iter().map(Cell::get).collect();
        assert_eq!(cells, [30, 31, 32, 39, 40, 41, 48, 49, 50]);
    }
}
