//! The propagation engine: fills in forced digits by the two deterministic
//! singles rules.
//!
//! A *naked single* is a digit placed because it is the only remaining
//! possibility of its tile. A *hidden single* is a digit placed because,
//! within one group, only a single tile can still take it, even though that
//! tile has other possibilities left.
//!
//! Both rules are fixed-point iterations. They are written as explicit loops
//! rather than mutual recursion; termination is immediate from the loop
//! structure, since every iteration that continues has placed at least one
//! digit and at most 81 placements exist.

use crate::bitset::Set;
use crate::board::{Board, Cell, House};

#[cfg(doc)]
use crate::board::Event;

/// Applies the naked and hidden single rules to a [`Board`] until no further
/// progress can be made.
///
/// Every placement announces [`Event::Filled`] on the affected tile. A board
/// that still has open tiles after [`solve`](Propagator::solve) is simply not
/// solvable by these two rules; query [`Board::n_empty`] to find out.
pub struct Propagator<'a> {
    board: &'a mut Board,
}

impl<'a> Propagator<'a> {
    /// Creates a propagator operating on the given board.
    pub fn new(board: &'a mut Board) -> Self {
        Propagator { board }
    }

    /// Narrows every open tile's possibility set by the digits already placed
    /// in its row, column and block.
    ///
    /// Possibility sets only ever shrink, so re-running this is always safe
    /// and idempotent. Both rules recompute possibilities before scanning,
    /// since a placement in one group invalidates possibilities in the two
    /// other groups of the placed tile.
    pub fn update_possibilities(&mut self) {
        for house in House::all() {
            let mut placed = Set::NONE;
            for cell in house.cells() {
                if let Some(digit) = self.board.tile(cell).symbol() {
                    placed |= digit;
                }
            }
            if placed.is_empty() {
                continue;
            }
            for cell in house.cells() {
                self.board.tile_mut(cell).remove_possibilities(placed);
            }
        }
    }

    /// Rule 1: places every digit that is the sole remaining possibility of
    /// its tile, repeating until a full scan places nothing.
    ///
    /// Returns the number of digits placed.
    pub fn naked_single(&mut self) -> usize {
        let mut n_placed = 0;
        'fixpoint: loop {
            self.update_possibilities();
            for cell in Cell::all() {
                let tile = self.board.tile(cell);
                if !tile.is_empty() {
                    continue;
                }
                if let Some(digit) = tile.possible().unique() {
                    self.board.place(cell, digit);
                    n_placed += 1;
                    // possibilities are stale now, restart the scan
                    continue 'fixpoint;
                }
            }
            return n_placed;
        }
    }

    /// Rule 2: for every group, places every digit that only a single open
    /// tile of the group can still take.
    ///
    /// Each hidden placement can unlock naked singles elsewhere, so the
    /// naked-single fixed point is re-run after every placement; the two
    /// rules interleave until their joint fixed point.
    ///
    /// Returns the total number of digits placed, including those placed by
    /// the interleaved naked-single passes.
    pub fn hidden_single(&mut self) -> usize {
        let mut n_placed = 0;
        'fixpoint: loop {
            self.update_possibilities();
            for house in House::all() {
                let mut unsolved = Set::NONE;
                let mut multiple_unsolved = Set::NONE;
                for cell in house.cells() {
                    let tile = self.board.tile(cell);
                    if tile.is_empty() {
                        multiple_unsolved |= unsolved & tile.possible();
                        unsolved |= tile.possible();
                    }
                }

                // digits possible in exactly one open tile of this group
                let singles = unsolved.without(multiple_unsolved);
                if singles.is_empty() {
                    continue;
                }

                for cell in house.cells() {
                    let tile = self.board.tile(cell);
                    if !tile.is_empty() {
                        continue;
                    }
                    if let Some(digit) = (tile.possible() & singles).into_iter().next() {
                        self.board.place(cell, digit);
                        n_placed += 1;
                        n_placed += self.naked_single();
                        continue 'fixpoint;
                    }
                }
            }
            return n_placed;
        }
    }

    /// Applies both rules until neither makes progress and returns the number
    /// of digits placed.
    ///
    /// The rules recurse internally to their own fixed points and call into
    /// each other, so one top-level pass of each reaches the joint fixed
    /// point. No rule beyond these two is attempted; residual open tiles are
    /// an expected outcome, not a failure.
    pub fn solve(&mut self) -> usize {
        let n_placed = self.naked_single();
        n_placed + self.hidden_single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn almost_empty_board() -> Board {
        Board::from_rows([
            "4........",
            ".....5...",
            "........1",
            "...2.....",
            ".6.......",
            ".......3.",
            "..9......",
            "....7....",
            ".........",
        ])
        .unwrap()
    }

    #[test]
    fn update_possibilities_is_idempotent() {
        let mut board = almost_empty_board();
        let mut propagator = Propagator::new(&mut board);
        propagator.update_possibilities();
        let first: Vec<_> = propagator.board.tiles().map(|tile| tile.possible()).collect();
        propagator.update_possibilities();
        let second: Vec<_> = propagator.board.tiles().map(|tile| tile.possible()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn update_possibilities_removes_placed_digits() {
        let mut board = almost_empty_board();
        Propagator::new(&mut board).update_possibilities();

        // (0, 1): same row as the 4, same block, same column as the 6
        let tile = board.tile(Cell::new(1));
        assert!(!tile.possible().contains(crate::board::Digit::new(4)));
        assert!(!tile.possible().contains(crate::board::Digit::new(6)));
        assert_eq!(tile.possible().len(), 7);
    }
}
