use alloc::string::String;
use core::fmt::Write;

use crate::*;

/// Glyph shown for a face-down card.
pub const HIDDEN_GLYPH: char = '*';

/// Renders the board as a text grid with 1-based row and column headers.
///
/// ```text
///       1   2
///    +---+---+
///  1 | A | * |
///    +---+---+
/// ```
pub fn render_board(board: &Board) -> String {
    let (rows, cols) = board.size();
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..cols {
        let _ = write!(out, "{:>3} ", u16::from(col) + 1);
    }
    out.push('\n');
    push_rule(&mut out, cols);

    for row in 0..rows {
        let _ = write!(out, "{:>2} |", u16::from(row) + 1);
        for col in 0..cols {
            let cell = board[(row, col)];
            let glyph = if cell.is_shown() {
                cell.symbol
            } else {
                HIDDEN_GLYPH
            };
            let _ = write!(out, " {glyph} |");
        }
        out.push('\n');
        push_rule(&mut out, cols);
    }

    out
}

fn push_rule(out: &mut String, cols: Coord) {
    out.push_str("   +");
    for _ in 0..cols {
        out.push_str("---+");
    }
    out.push('\n');
}
