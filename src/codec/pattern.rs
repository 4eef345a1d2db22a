//! Sparse pattern types exchanged with clients
//!
//! Field names are part of the external JSON contract and are mapped
//! explicitly with serde attributes.

use serde::{Deserialize, Serialize};

/// Coordinates of one live cell, centred on the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LiveCell {
    /// Row coordinate
    pub i: i32,
    /// Column coordinate
    pub j: i32,
}

impl LiveCell {
    /// Create a live cell at `(i, j)`
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }
}

impl From<(i32, i32)> for LiveCell {
    fn from((i, j): (i32, i32)) -> Self {
        Self { i, j }
    }
}

/// Sparse representation of a pattern on a square board
///
/// `board_array_size` is `max + 1` of the board the cells live on, so every
/// coordinate should satisfy `|c| < board_array_size`. Cells are not required
/// to be sorted or unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternObject {
    /// Half side length plus one of the enclosing board
    #[serde(rename = "boardArraySize")]
    pub board_array_size: i32,
    /// Live cell coordinates
    #[serde(rename = "liveCells")]
    pub live_cells: Vec<LiveCell>,
}

impl PatternObject {
    /// Create a pattern object from its parts
    pub const fn new(board_array_size: i32, live_cells: Vec<LiveCell>) -> Self {
        Self {
            board_array_size,
            live_cells,
        }
    }

    /// Copy with live cells sorted by `i` then `j` and duplicates removed
    #[must_use]
    pub fn canonical(&self) -> Self {
        let mut live_cells = self.live_cells.clone();
        live_cells.sort_unstable();
        live_cells.dedup();
        Self {
            board_array_size: self.board_array_size,
            live_cells,
        }
    }
}

/// Named, attributed catalogue submission wrapping a pattern object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternPackage {
    /// Catalogue name of the pattern
    pub name: String,
    /// Submitting user
    pub username: String,
    /// Free-form description
    pub comments: String,
    /// The pattern itself
    pub pattern_object: PatternObject,
}

/// Lookup result for a single catalogue entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRecord {
    /// Submitting user
    pub username: String,
    /// Free-form description
    pub comments: String,
    /// Re-centred pattern decoded from storage
    pub pattern_object: PatternObject,
}
