//! Sparse pattern to grid text re-encoding
//!
//! The inverse of decoding: builds a board covering the bounds implied by
//! `boardArraySize`, marks the live cells, and writes one row per line. The
//! output is the canonical storage form, so equal patterns always produce
//! byte-identical text whatever order their cells were listed in.

use crate::codec::pattern::PatternObject;
use crate::io::configuration::{ALIVE_MARKER, DEAD_MARKER, LINE_SEPARATOR, MAX_BOARD_ARRAY_SIZE};
use crate::io::error::{Result, malformed_pattern};
use crate::spatial::Board;

/// Build the board described by a pattern object
///
/// # Errors
///
/// Returns [`crate::LifecatError::MalformedPattern`] if:
/// - `board_array_size` is below 1 or above [`MAX_BOARD_ARRAY_SIZE`]
/// - Any live cell lies outside `[-(board_array_size - 1), board_array_size - 1]`
///
/// The whole pattern is rejected; no cell is silently dropped.
pub fn board_from_pattern(pattern: &PatternObject) -> Result<Board> {
    let size = pattern.board_array_size;
    if size < 1 {
        return Err(malformed_pattern(&format!(
            "boardArraySize must be at least 1, got {size}"
        )));
    }
    if size > MAX_BOARD_ARRAY_SIZE {
        return Err(malformed_pattern(&format!(
            "boardArraySize {size} exceeds the limit of {MAX_BOARD_ARRAY_SIZE}"
        )));
    }

    let mut board = Board::new(size);
    for cell in &pattern.live_cells {
        if !board.set(true, cell.i, cell.j) {
            return Err(malformed_pattern(&format!(
                "live cell ({}, {}) lies outside [{}, {}]",
                cell.i,
                cell.j,
                board.min(),
                board.max()
            )));
        }
    }

    Ok(board)
}

/// Write a board as grid text, one line per row with no trailing separator
pub fn render_grid_text(board: &Board) -> String {
    let side = board.side();
    let mut text = String::with_capacity(side * (side + 1));

    for i in board.min()..=board.max() {
        if i > board.min() {
            text.push(LINE_SEPARATOR);
        }
        for j in board.min()..=board.max() {
            let alive = board.get(i, j).is_some_and(|cell| cell.is_alive());
            text.push(if alive { ALIVE_MARKER } else { DEAD_MARKER });
        }
    }

    text
}

/// Convert a pattern object to its canonical grid text
///
/// # Errors
///
/// Returns [`crate::LifecatError::MalformedPattern`] under the same conditions
/// as [`board_from_pattern`].
pub fn to_grid_text(pattern: &PatternObject) -> Result<String> {
    board_from_pattern(pattern).map(|board| render_grid_text(&board))
}
