//! Seeded random pattern generation

use crate::codec::encode::serialize;
use crate::codec::pattern::PatternObject;
use crate::io::configuration::MAX_BOARD_ARRAY_SIZE;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Board;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fill a board at random and encode it
///
/// Each cell is alive with probability `density`. The same seed always yields
/// the same pattern.
///
/// # Errors
///
/// Returns an error if:
/// - `board_array_size` is outside `1..=MAX_BOARD_ARRAY_SIZE`
/// - `density` is outside `0.0..=1.0`
pub fn random_soup(board_array_size: i32, density: f64, seed: u64) -> Result<PatternObject> {
    if !(1..=MAX_BOARD_ARRAY_SIZE).contains(&board_array_size) {
        return Err(invalid_parameter(
            "board_array_size",
            &board_array_size,
            &format!("must be between 1 and {MAX_BOARD_ARRAY_SIZE}"),
        ));
    }
    if !(0.0..=1.0).contains(&density) {
        return Err(invalid_parameter(
            "density",
            &density,
            &"must be between 0.0 and 1.0",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(board_array_size);
    for i in board.min()..=board.max() {
        for j in board.min()..=board.max() {
            if rng.random_bool(density) {
                board.set(true, i, j);
            }
        }
    }

    Ok(serialize(&board))
}
