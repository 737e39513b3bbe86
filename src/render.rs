//! Text rendering of the full board, ships included.
//!
//! Used for the `--debug` startup dump and the reveal on surrender; during
//! normal play the board stays hidden.

use std::fmt::Write;

use crate::grid::Grid;
use crate::ship::{Direction, PlacedShip};

const EMPTY_CELL: &str = "___";
const HIT_CELL: &str = "_x_";
const HEAD_HORIZONTAL: &str = "_<-";
const BODY_HORIZONTAL: &str = "_-_";
const HEAD_VERTICAL: &str = "_\u{2191}_";
const BODY_VERTICAL: &str = "_|_";

/// Render the fully revealed board as text. Intact ship cells show a
/// direction glyph (head distinguished from body), hit cells show `_x_`
/// whether or not the ship is sunk, and everything else is a neutral
/// placeholder. Row headers are letters, column headers 1-based numbers.
pub fn render_board(grid: Grid, fleet: &[PlacedShip]) -> String {
    let mut cells = vec![vec![EMPTY_CELL; grid.cols()]; grid.rows()];
    for ship in fleet {
        for cell in ship.cells() {
            cells[cell.row][cell.col] = if ship.is_hit(cell) {
                HIT_CELL
            } else {
                match ship.direction() {
                    Direction::Horizontal if ship.is_head(cell) => HEAD_HORIZONTAL,
                    Direction::Horizontal => BODY_HORIZONTAL,
                    Direction::Vertical if ship.is_head(cell) => HEAD_VERTICAL,
                    Direction::Vertical => BODY_VERTICAL,
                }
            };
        }
    }

    let mut out = String::new();
    out.push_str("|___");
    for col in 0..grid.cols() {
        let _ = write!(out, "|_{:2}", col + 1);
    }
    out.push_str("|\n");
    for (row_no, row) in cells.iter().enumerate() {
        let _ = write!(out, "|_{}_", row_letter(row_no));
        for cell in row {
            let _ = write!(out, "|{}", cell);
        }
        out.push_str("|\n");
    }
    out
}

fn row_letter(row: usize) -> char {
    (b'A' + row as u8) as char
}
