use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - NotStarted -> Won
/// - NotStarted -> Lost
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GamePhase {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// How the mine counter is updated when a mine is revealed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossAccounting {
    /// Take one off the previous counter, saturating at zero.
    ///
    /// The counter is not recomputed, so revealing a mine that already carries a flag counts it
    /// twice.
    #[default]
    Decrement,
    /// Recount unflagged mines from the board, ignoring the revealed mine.
    Recount,
}

/// Snapshot of the game's progress, derived from the board after every action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub unflagged_mine_count: CellCount,
    pub started: bool,
    pub lost: bool,
    pub ended: bool,
}

impl GameState {
    /// State of a game that has not seen any action yet.
    pub fn new(board: &Board) -> Self {
        Self {
            unflagged_mine_count: board.unflagged_mine_count(),
            started: false,
            lost: false,
            ended: false,
        }
    }

    pub const fn phase(&self) -> GamePhase {
        match (self.started, self.ended, self.lost) {
            (_, _, true) => GamePhase::Lost,
            (_, true, false) => GamePhase::Won,
            (true, false, false) => GamePhase::InProgress,
            (false, false, false) => GamePhase::NotStarted,
        }
    }

    pub const fn is_won(&self) -> bool {
        self.ended && !self.lost
    }

    /// Next state after an action produced `board`, see [`next_state`].
    pub(crate) fn next(&self, board: &Board, last_revealed: Option<&Cell>) -> Self {
        self.next_with(board, last_revealed, LossAccounting::default())
    }

    pub(crate) fn next_with(
        &self,
        board: &Board,
        last_revealed: Option<&Cell>,
        accounting: LossAccounting,
    ) -> Self {
        if last_revealed.is_some_and(|cell| cell.mined) {
            let unflagged_mine_count = match accounting {
                LossAccounting::Decrement => self.unflagged_mine_count.saturating_sub(1),
                LossAccounting::Recount => board.unflagged_mine_count(),
            };
            return Self {
                unflagged_mine_count,
                started: true,
                lost: true,
                ended: true,
            };
        }

        let unflagged_mine_count = board.unflagged_mine_count();

        // every mine carries a flag
        if unflagged_mine_count == 0 {
            return Self {
                unflagged_mine_count,
                started: true,
                lost: false,
                ended: true,
            };
        }

        Self {
            unflagged_mine_count,
            started: true,
            ..*self
        }
    }
}

/// Derives the state that follows `old` once an action produced `board`.
///
/// `last_revealed` is the cell the player tried to open, if the action was a reveal. A mined cell
/// there is a losing move; otherwise the game is won once every mine is flagged.
pub fn next_state(old: &GameState, board: &Board, last_revealed: Option<&Cell>) -> GameState {
    old.next(board, last_revealed)
}

/// [`next_state`] with an explicit policy for the mine counter on a losing move.
pub fn next_state_with(
    old: &GameState,
    board: &Board,
    last_revealed: Option<&Cell>,
    accounting: LossAccounting,
) -> GameState {
    old.next_with(board, last_revealed, accounting)
}
