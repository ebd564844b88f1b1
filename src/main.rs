use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use sudoku_singles::{Board, Cell, Event, Propagator};

/// Check a sudoku board (complete or incomplete) for duplicate digits in a
/// row, a column or a block, and fill in digits forced by the naked and
/// hidden single rules.
#[derive(Parser, Debug)]
#[command(name = "sudoku-singles", version)]
struct Cli {
    /// File containing the board: 9 lines of 9 symbols from 1-9, '.' for empty
    board: PathBuf,

    /// Only check for duplicates, do not fill in any digits
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let input = match fs::read_to_string(&cli.board) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("cannot read {}: {}", cli.board.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let mut board: Board = match input.parse() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{}: {}", cli.board.display(), err);
            return ExitCode::FAILURE;
        }
    };

    // Report each duplicate tile once even though a tile in several bad
    // groups announces several duplicate events.
    for cell in Cell::all() {
        let mut reported = false;
        board.register(cell, move |tile, event| {
            if event == Event::Duplicate && !reported {
                reported = true;
                println!(
                    "tile at row {}, column {} is a duplicate of {}",
                    tile.row().get(),
                    tile.col().get(),
                    tile.to_char(),
                );
            }
        });
    }

    if !cli.check {
        let n_placed = Propagator::new(&mut board).solve();
        if n_placed > 0 {
            println!("placed {} digit(s)", n_placed);
        }
    }

    print!("{}", board);

    if board.good_board() {
        println!("valid");
    } else {
        println!("invalid");
    }
    if !board.is_filled() {
        println!("not fully solved ({} empty)", board.n_empty());
    }

    ExitCode::SUCCESS
}
