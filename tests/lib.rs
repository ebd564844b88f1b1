use std::cell::RefCell;
use std::rc::Rc;

use sudoku_singles::{Board, Cell, Digit, Event, FormatError, House, Propagator};

const SOLVED: [&str; 9] = [
    "534678912",
    "672195348",
    "198342567",
    "859761423",
    "426853791",
    "713924856",
    "961537284",
    "287419635",
    "345286179",
];

fn board(rows: [&str; 9]) -> Board {
    Board::from_rows(rows).unwrap_or_else(|err| panic!("{}", err))
}

/// Registers a logging listener on every tile and returns the shared event log.
fn record_events(board: &mut Board) -> Rc<RefCell<Vec<(Cell, Event)>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    for cell in Cell::all() {
        let log = Rc::clone(&log);
        board.register(cell, move |tile, event| {
            log.borrow_mut().push((tile.cell(), event));
        });
    }
    log
}

#[test]
fn board_has_81_tiles_and_27_groups() {
    let board = board(SOLVED);
    assert_eq!(board.tiles().count(), 81);
    assert_eq!(House::all().count(), 27);
    for house in House::all() {
        assert_eq!(house.cells().len(), 9);
    }
    for cell in Cell::all() {
        let n_containing = House::all()
            .filter(|house| house.cells().contains(cell))
            .count();
        assert_eq!(n_containing, 3);
    }
}

#[test]
fn wrong_row_count() {
    let rows: Vec<&str> = SOLVED[..8].to_vec();
    assert_eq!(
        Board::from_rows(rows).unwrap_err(),
        FormatError::WrongRowCount(8)
    );
}

#[test]
fn wrong_row_length() {
    let mut rows = SOLVED;
    rows[3] = "85976142";
    assert_eq!(
        Board::from_rows(rows).unwrap_err(),
        FormatError::WrongRowLength { row: 3, len: 8 }
    );
}

#[test]
fn invalid_symbol() {
    let mut rows = SOLVED;
    rows[0] = "53467891x";
    assert_eq!(
        Board::from_rows(rows).unwrap_err(),
        FormatError::InvalidSymbol {
            row: 0,
            col: 8,
            ch: 'x'
        }
    );
    let mut rows = SOLVED;
    rows[5] = "713024856"; // '0' is not part of the alphabet
    assert!(matches!(
        Board::from_rows(rows).unwrap_err(),
        FormatError::InvalidSymbol { ch: '0', .. }
    ));
}

#[test]
fn initial_possibility_sets() {
    let mut rows = SOLVED;
    rows[0] = ".34678912";
    let board = board(rows);
    assert!(board.tile(Cell::new(0)).possible().is_full());
    assert_eq!(
        board.tile(Cell::new(1)).possible().unique(),
        Some(Digit::new(3))
    );
}

#[test]
fn good_board_on_solved_grid() {
    let mut board = board(SOLVED);
    let log = record_events(&mut board);
    assert!(board.good_board());
    assert!(log.borrow().is_empty());
}

#[test]
fn column_duplicates_announced_in_a_filled_grid() {
    // Every row and block of this grid is fine, but column 7 holds two 9s
    // and column 8 two 5s. All four offending tiles must be flagged, in
    // house order: the column houses come after the row houses.
    let mut board = board([
        "435269781",
        "682571493",
        "197834562",
        "826195347",
        "374682915",
        "951743628",
        "519326874",
        "248957136",
        "763418295",
    ]);
    let log = record_events(&mut board);

    assert!(!board.good_board());
    assert_eq!(
        *log.borrow(),
        vec![
            (Cell::new(16), Event::Duplicate),
            (Cell::new(79), Event::Duplicate),
            (Cell::new(44), Event::Duplicate),
            (Cell::new(80), Event::Duplicate),
        ]
    );
}

#[test]
fn duplicate_in_row_announced_on_both_tiles() {
    let mut board = board([
        "523541678",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
    ]);
    let log = record_events(&mut board);

    // house 0 is the topmost row
    assert!(!board.unique_choices(House::new(0)));
    let events = log.borrow();
    assert_eq!(
        *events,
        vec![
            (Cell::new(0), Event::Duplicate),
            (Cell::new(3), Event::Duplicate),
        ]
    );
}

#[test]
fn good_board_is_idempotent_on_invalid_board() {
    let mut rows = SOLVED;
    rows[8] = "345286177"; // 7 duplicated in the last row and column
    let mut board = board(rows);
    assert!(!board.good_board());
    assert!(!board.good_board());
}

#[test]
fn naked_single_fills_the_one_blank() {
    let mut rows = SOLVED;
    rows[4] = "4268.3791";
    let mut board = board(rows);
    let log = record_events(&mut board);

    let n_placed = Propagator::new(&mut board).naked_single();

    assert_eq!(n_placed, 1);
    assert_eq!(
        board.tile(Cell::new(4 * 9 + 4)).symbol(),
        Some(Digit::new(5))
    );
    assert_eq!(
        *log.borrow(),
        vec![(Cell::new(4 * 9 + 4), Event::Filled)]
    );
    assert!(board.good_board());
}

#[test]
fn naked_singles_restore_a_blanked_row() {
    let mut rows = SOLVED;
    rows[8] = ".........";
    let mut board = board(rows);

    let n_placed = Propagator::new(&mut board).solve();

    assert_eq!(n_placed, 9);
    assert!(board.is_filled());
    assert!(board.good_board());
    assert_eq!(board.to_string(), SOLVED.join("\n") + "\n");
}

#[test]
fn hidden_single_found_in_block() {
    // Only one tile of the top left block can take a 1: the 1s in the second
    // and third row and in the second and third column pin it to the corner,
    // even though the corner has plenty of other possibilities.
    let mut board = board([
        ".........",
        "...1.....",
        "......1..",
        ".........",
        ".1.......",
        "..1......",
        ".........",
        ".........",
        ".........",
    ]);
    let log = record_events(&mut board);
    let corner = Cell::new(0);
    assert!(board.tile(corner).possible().is_full());

    let mut propagator = Propagator::new(&mut board);
    assert_eq!(propagator.naked_single(), 0);
    let n_placed = propagator.hidden_single();

    assert_eq!(n_placed, 1);
    assert_eq!(board.tile(corner).symbol(), Some(Digit::new(1)));
    assert_eq!(*log.borrow(), vec![(corner, Event::Filled)]);
}

#[test]
fn solving_a_solved_board_is_a_noop() {
    let mut board = board(SOLVED);
    let log = record_events(&mut board);

    let n_placed = Propagator::new(&mut board).solve();

    assert_eq!(n_placed, 0);
    assert!(log.borrow().is_empty());
    for (tile, row) in board.tiles().zip(SOLVED.iter().flat_map(|row| row.chars())) {
        assert_eq!(tile.to_char(), row);
    }
}

#[test]
fn underdetermined_board_is_left_partially_solved() {
    let mut board = board([
        "4........",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
    ]);
    let n_placed = Propagator::new(&mut board).solve();
    assert_eq!(n_placed, 0);
    assert_eq!(board.n_empty(), 80);
    assert!(board.good_board());
}

#[test]
fn listeners_fire_in_registration_order() {
    let mut board = board(SOLVED);
    let log = Rc::new(RefCell::new(Vec::new()));

    for id in [1, 2] {
        let log = Rc::clone(&log);
        board.register(Cell::new(0), move |_, event| {
            log.borrow_mut().push((id, event));
        });
    }

    // the core never announces this event, external consumers may
    board.announce(Cell::new(0), Event::Normalify);
    assert_eq!(
        *log.borrow(),
        vec![(1, Event::Normalify), (2, Event::Normalify)]
    );
}

#[test]
fn parse_and_display_roundtrip() {
    let input = SOLVED.join("\n");
    let board: Board = input.parse().unwrap();
    assert_eq!(board.to_string(), input + "\n");
}

#[test]
fn parse_ignores_surrounding_whitespace() {
    let input: String = SOLVED
        .iter()
        .map(|row| format!("  {}\t\n", row))
        .collect();
    let board: Board = input.parse().unwrap();
    assert_eq!(board.to_string(), SOLVED.join("\n") + "\n");
}

#[test]
fn parse_rejects_malformed_text() {
    assert!("".parse::<Board>().is_err());
    assert!("435269781".parse::<Board>().is_err());
}
