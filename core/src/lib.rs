#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
#[cfg(feature = "std")]
pub use clock::*;
pub use error::*;
pub use generator::*;
pub use reveal::*;
pub use session::*;
pub use state::*;
pub use types::*;

mod board;
mod cell;
#[cfg(feature = "std")]
mod clock;
mod error;
mod generator;
mod reveal;
mod session;
mod state;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub total_mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, total_mines: CellCount) -> Self {
        Self {
            width,
            height,
            total_mines,
        }
    }

    /// Clamps both dimensions to at least 1 and the mines to the number of cells.
    pub fn new(width: Coord, height: Coord, total_mines: CellCount) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let total_cells = mult(width, height);
        if total_mines > total_cells {
            log::warn!(
                "Requested {} mines but a {}x{} board only fits {}",
                total_mines,
                width,
                height,
                total_cells
            );
        }
        Self::new_unchecked(width, height, total_mines.min(total_cells))
    }

    /// The classic 9x9 board with 10 mines.
    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    /// `(height, width)`, matching the `(row, col)` order of coordinates.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::beginner()
    }
}
