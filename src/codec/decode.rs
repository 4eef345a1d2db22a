//! Grid text to board decoding
//!
//! The decoded board is the smallest odd square that fits every line of the
//! source text, with the first line on row `min` and the first character of
//! each line on column `min`. Short lines and any padding row or column added
//! to keep the side odd stay dead.

use crate::io::configuration::{ALIVE_MARKER, LINE_SEPARATOR, MAX_BOARD_ARRAY_SIZE};
use crate::io::error::{Result, malformed_pattern};
use crate::spatial::Board;

/// Largest board side accepted by [`deserialize_bounded`]
pub const MAX_BOARD_SIDE: usize = (2 * MAX_BOARD_ARRAY_SIZE - 1) as usize;

/// Side of the board [`deserialize`] builds for `text`
pub fn board_side(text: &str) -> usize {
    let line_count = text.split(LINE_SEPARATOR).count();
    let max_line_length = text
        .split(LINE_SEPARATOR)
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let largest_side = line_count.max(max_line_length);
    // Even sides have no centre cell
    if largest_side % 2 == 0 {
        largest_side + 1
    } else {
        largest_side
    }
}

/// Parse grid text into an origin-centred board
///
/// Total for every input whose side fits [`MAX_BOARD_SIDE`], including the
/// empty string. Any character other than the alive marker is treated as
/// dead. Text from outside the process should go through
/// [`deserialize_bounded`].
pub fn deserialize(text: &str) -> Board {
    let board_array_size = ((board_side(text) - 1) / 2 + 1) as i32;

    let mut board = Board::new(board_array_size);
    let min = board.min();

    for (row, line) in text.split(LINE_SEPARATOR).enumerate() {
        let i = min + row as i32;
        for (col, marker) in line.chars().enumerate() {
            if marker == ALIVE_MARKER {
                board.set(true, i, min + col as i32);
            }
        }
    }

    board
}

/// Parse grid text, refusing boards larger than [`MAX_BOARD_SIDE`]
///
/// # Errors
///
/// Returns [`crate::LifecatError::MalformedPattern`] if the text needs a
/// board side above [`MAX_BOARD_SIDE`]; nothing is allocated in that case
pub fn deserialize_bounded(text: &str) -> Result<Board> {
    let side = board_side(text);
    if side > MAX_BOARD_SIDE {
        return Err(malformed_pattern(&format!(
            "grid needs a {side}x{side} board, limit is {MAX_BOARD_SIDE}x{MAX_BOARD_SIDE}"
        )));
    }
    Ok(deserialize(text))
}
