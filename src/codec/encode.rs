//! Board to sparse pattern encoding

use crate::codec::pattern::{LiveCell, PatternObject};
use crate::spatial::Board;

/// Scan a board row-major and collect its live cells
///
/// Cells come out in canonical order: ascending `i`, then ascending `j`.
pub fn serialize(board: &Board) -> PatternObject {
    let live_cells = board.live_cells().map(LiveCell::from).collect();
    PatternObject::new(board.board_array_size(), live_cells)
}
