use serde::{Deserialize, Serialize};

/// State of a single board position.
///
/// `val` holds the adjacency value and is only filled in once the cell is revealed. Mined cells
/// never get one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub flagged: bool,
    pub mined: bool,
    pub revealed: bool,
    pub val: Option<u8>,
}

impl Cell {
    /// Whether a player may open this cell directly.
    pub const fn can_reveal(self) -> bool {
        !self.revealed && !self.flagged
    }

    /// Whether a player may place or remove a flag here.
    pub const fn can_flag(self) -> bool {
        !self.revealed
    }

    /// Mined and not covered by a flag.
    pub const fn is_unflagged_mine(self) -> bool {
        self.mined && !self.flagged
    }
}
