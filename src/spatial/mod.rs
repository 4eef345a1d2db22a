//! Spatial data structures shared by the codec
//!
//! This module contains the origin-centred board the decoder, encoder and
//! re-encoder build on.

/// Signed-coordinate square board and cell states
pub mod board;

pub use board::{Board, CellObserver, CellState};
