//! Origin-centred square board addressed by signed coordinates
//!
//! A board of `board_array_size` n covers `[-(n-1), n-1]` on both axes, so its
//! side `2n - 1` is always odd and `(0, 0)` is always the centre cell. Bounds
//! are fixed at construction.

use crate::io::configuration::MAX_BOARD_ARRAY_SIZE;
use ndarray::Array2;

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    /// Empty cell
    #[default]
    Dead,
    /// Occupied cell
    Alive,
}

impl CellState {
    /// Fresh dead cell used to fill newly allocated boards
    pub const fn dead() -> Self {
        Self::Dead
    }

    /// Map a boolean to a cell state
    pub const fn from_alive(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }

    /// Whether the cell is alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

/// Receives notifications of cell writes made through [`Board::set_observed`]
///
/// Lets a live simulation keep derived state such as neighbour counts in step
/// with board edits. The codec itself never installs an observer.
pub trait CellObserver {
    /// Called after the cell at `(i, j)` has been written
    fn cell_changed(&mut self, i: i32, j: i32, previous: CellState, current: CellState);
}

/// Square grid of cell states indexed by `i, j ∈ [min, max]`, `min = -max`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<CellState>,
    max: i32,
}

impl Board {
    /// Create an all-dead board with the given `board_array_size` (`max + 1`)
    ///
    /// Sizes are clamped to `1..=MAX_BOARD_ARRAY_SIZE`; below 1 gives a
    /// single-cell board.
    pub fn new(board_array_size: i32) -> Self {
        let max = board_array_size.clamp(1, MAX_BOARD_ARRAY_SIZE) - 1;
        let side = (2 * max + 1) as usize;
        let cells = Array2::from_shape_fn((side, side), |_| CellState::dead());
        Self { cells, max }
    }

    /// Lowest valid coordinate on either axis
    pub const fn min(&self) -> i32 {
        -self.max
    }

    /// Highest valid coordinate on either axis
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Number of cells along one side (always odd)
    pub const fn side(&self) -> usize {
        (2 * self.max + 1) as usize
    }

    /// Size reported in pattern objects, `max + 1`
    pub const fn board_array_size(&self) -> i32 {
        self.max + 1
    }

    /// Whether `(i, j)` lies within `[min, max]` on both axes
    pub const fn contains(&self, i: i32, j: i32) -> bool {
        i >= -self.max && i <= self.max && j >= -self.max && j <= self.max
    }

    /// Read the cell at `(i, j)`, `None` outside the board
    pub fn get(&self, i: i32, j: i32) -> Option<CellState> {
        let index = self.index(i, j)?;
        self.cells.get(index).copied()
    }

    /// Write the cell at `(i, j)`
    ///
    /// Returns `false` and leaves the board untouched when `(i, j)` is outside
    /// the board.
    pub fn set(&mut self, alive: bool, i: i32, j: i32) -> bool {
        self.write(alive, i, j).is_some()
    }

    /// Write the cell at `(i, j)` and report the change to `observer`
    ///
    /// The observer is not called for out-of-range coordinates.
    pub fn set_observed(
        &mut self,
        alive: bool,
        i: i32,
        j: i32,
        observer: &mut dyn CellObserver,
    ) -> bool {
        match self.write(alive, i, j) {
            Some(previous) => {
                observer.cell_changed(i, j, previous, CellState::from_alive(alive));
                true
            }
            None => false,
        }
    }

    /// Iterate over live cell coordinates in ascending `i`, then ascending `j`
    pub fn live_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let min = self.min();
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |((row, col), _)| (min + row as i32, min + col as i32))
    }

    /// Number of live cells on the board
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    fn write(&mut self, alive: bool, i: i32, j: i32) -> Option<CellState> {
        let index = self.index(i, j)?;
        let cell = self.cells.get_mut(index)?;
        let previous = *cell;
        *cell = CellState::from_alive(alive);
        Some(previous)
    }

    const fn index(&self, i: i32, j: i32) -> Option<[usize; 2]> {
        if self.contains(i, j) {
            Some([(i + self.max) as usize, (j + self.max) as usize])
        } else {
            None
        }
    }
}
