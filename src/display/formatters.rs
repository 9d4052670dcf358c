// Display formatting utilities for board state

use std::fmt::Write;

use crate::board::BoardGrid;

/// Glyph for a cell occupant: first letter of the color, uppercased
/// ("white" -> 'W'); '?' when the color string is empty.
pub fn occupant_glyph(color: &str) -> char {
    color
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

/// Format column headers for a board
pub fn format_column_headers(cols: usize) -> String {
    let mut out = String::from("    ");
    for col in 0..cols {
        let _ = write!(out, " {:2}", col);
    }
    out.push('\n');
    out
}

/// Format the row prefix for a board row
pub fn format_row_prefix(row: usize) -> String {
    format!("{:2}: ", row)
}

/// Render the occupancy registry as ASCII: '.' for empty cells, the
/// occupant glyph for pieces. Only in-range cells are shown; anything a
/// caller placed outside the grid is summarized in a trailing line.
pub fn format_board(board: &BoardGrid) -> String {
    let rows = board.config().rows;
    let cols = board.config().cols;

    let mut out = format!("=== BOARD ({} x {}) ===\n", rows, cols);
    out.push_str(&format_column_headers(cols));

    for row in 0..rows {
        out.push_str(&format_row_prefix(row));
        for col in 0..cols {
            match board.piece_at(row as i32, col as i32) {
                Some(color) => {
                    let _ = write!(out, " {} ", occupant_glyph(color));
                }
                None => out.push_str(" . "),
            }
        }
        out.push('\n');
    }

    let off_board = board
        .pieces()
        .filter(|((row, col), _)| {
            *row < 0 || *col < 0 || *row >= rows as i32 || *col >= cols as i32
        })
        .count();
    if off_board > 0 {
        let _ = writeln!(out, "({} pieces outside the grid)", off_board);
    }
    out
}

/// Print the board to stdout
pub fn print_board(board: &BoardGrid) {
    print!("{}", format_board(board));
}
