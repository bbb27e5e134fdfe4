use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
    Won,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Owner of the current board and state of one game.
///
/// Every action computes a new [`Board`] and [`GameState`] and swaps both in at once. Finished
/// games reject further actions with [`GameError::AlreadyEnded`].
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    board: Board,
    state: GameState,
    loss_accounting: LossAccounting,
    triggered_mine: Option<Coord2>,
    #[cfg(feature = "std")]
    clock: GameClock,
}

impl Session {
    /// New game on a randomly generated board.
    #[cfg(feature = "std")]
    pub fn new(config: GameConfig) -> Self {
        Self::from_board(generate(config))
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_board(RandomBoardGenerator::new(seed).generate(config))
    }

    /// New game on a fixed board, the configuration is taken from the board itself.
    pub fn from_board(board: Board) -> Self {
        Self {
            config: board.game_config(),
            state: GameState::new(&board),
            board,
            loss_accounting: LossAccounting::default(),
            triggered_mine: None,
            #[cfg(feature = "std")]
            clock: GameClock::default(),
        }
    }

    pub fn with_loss_accounting(mut self, loss_accounting: LossAccounting) -> Self {
        self.loss_accounting = loss_accounting;
        self
    }

    /// Discards the current game and starts over with the same configuration.
    #[cfg(feature = "std")]
    pub fn reset(&mut self) {
        self.replace_board(generate(self.config));
    }

    pub fn reset_with_seed(&mut self, seed: u64) {
        self.replace_board(RandomBoardGenerator::new(seed).generate(self.config));
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn is_ended(&self) -> bool {
        self.state.ended
    }

    pub fn mines_left(&self) -> CellCount {
        self.state.unflagged_mine_count
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Whether the elapsed-time display should keep ticking.
    pub fn is_ticking(&self) -> bool {
        self.state.started && !self.state.ended
    }

    #[cfg(feature = "std")]
    pub fn elapsed_secs(&self) -> u32 {
        self.clock.elapsed_secs()
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.board.validate_coords(coords)?;
        self.check_not_ended()?;

        if !self.board[coords].can_reveal() {
            return Ok(NoChange);
        }

        let board = reveal(&self.board, coords);
        let target = board[coords];
        let state = self
            .state
            .next_with(&board, Some(&target), self.loss_accounting);

        Ok(if state.lost {
            log::debug!("Hit mine at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.apply(board.fully_revealed(), state);
            HitMine
        } else if state.ended {
            self.apply(board, state);
            Won
        } else {
            self.apply(board, state);
            Revealed
        })
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;

        let coords = self.board.validate_coords(coords)?;
        self.check_not_ended()?;

        if !self.board[coords].can_flag() {
            return Ok(NoChange);
        }

        let board = self.board.flag_toggled(coords);
        let state = self.state.next(&board, None);
        let won = state.ended;
        self.apply(board, state);

        Ok(if won { Won } else { Changed })
    }

    fn apply(&mut self, board: Board, state: GameState) {
        let previous = self.state.phase();
        self.board = board;
        self.state = state;

        let phase = state.phase();
        if phase != previous {
            log::debug!("Game phase {:?} -> {:?}", previous, phase);
        }

        #[cfg(feature = "std")]
        {
            if state.started {
                self.clock.start();
            }
            if state.ended {
                self.clock.stop();
            }
        }
    }

    fn replace_board(&mut self, board: Board) {
        log::debug!("Starting new game: {:?}", self.config);
        self.state = GameState::new(&board);
        self.board = board;
        self.triggered_mine = None;
        #[cfg(feature = "std")]
        {
            self.clock = GameClock::default();
        }
    }

    fn check_not_ended(&self) -> Result<()> {
        if self.state.ended {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(size: Coord2, mines: &[Coord2]) -> Session {
        Session::from_board(Board::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn hitting_a_mine_loses_and_reveals_board() {
        let mut session = session((3, 3), &[(0, 0), (2, 2)]);

        let outcome = session.reveal((0, 0)).unwrap();

        assert_eq!(outcome, RevealOutcome::HitMine);
        assert!(outcome.has_update());
        assert_eq!(session.phase(), GamePhase::Lost);
        assert!(session.phase().is_final());
        assert_eq!(session.triggered_mine(), Some((0, 0)));
        assert_eq!(session.mines_left(), 1);
        assert!(session.board().iter_cells().all(|(_, cell)| cell.revealed));
        assert_eq!(session.board()[(0, 0)].val, None);
    }

    #[test]
    fn ended_game_rejects_moves() {
        let mut session = session((2, 2), &[(0, 0)]);
        session.reveal((0, 0)).unwrap();

        assert_eq!(session.reveal((1, 1)), Err(GameError::AlreadyEnded));
        assert_eq!(session.toggle_flag((1, 1)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut session = session((2, 2), &[(0, 0)]);

        assert_eq!(session.reveal((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(session.toggle_flag((0, 2)), Err(GameError::InvalidCoords));
        assert_eq!(session.phase(), GamePhase::NotStarted);
    }

    #[test]
    fn flagged_cell_cannot_be_revealed() {
        let mut session = session((2, 2), &[(0, 0)]);
        session.toggle_flag((1, 1)).unwrap();

        let outcome = session.reveal((1, 1)).unwrap();
        assert_eq!(outcome, RevealOutcome::NoChange);
        assert!(!outcome.has_update());
        assert!(!session.board()[(1, 1)].revealed);
    }

    #[test]
    fn revealed_cell_cannot_be_flagged() {
        let mut session = session((2, 2), &[(0, 0)]);
        assert_eq!(session.reveal((1, 1)).unwrap(), RevealOutcome::Revealed);

        let before = session.board().clone();
        let outcome = session.toggle_flag((1, 1)).unwrap();
        assert_eq!(outcome, MarkOutcome::NoChange);
        assert!(!outcome.has_update());
        assert_eq!(session.reveal((1, 1)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn flagging_all_mines_wins() {
        let mut session = session((3, 3), &[(0, 0), (2, 2)]);

        assert!(session.phase().is_initial());
        let outcome = session.toggle_flag((0, 0)).unwrap();
        assert_eq!(outcome, MarkOutcome::Changed);
        assert!(outcome.has_update());
        assert_eq!(session.mines_left(), 1);
        assert!(session.is_ticking());

        let outcome = session.toggle_flag((2, 2)).unwrap();
        assert_eq!(outcome, MarkOutcome::Won);
        assert!(outcome.has_update());
        assert_eq!(session.phase(), GamePhase::Won);
        assert!(session.phase().is_final());
        assert!(!session.is_ticking());
        assert_eq!(session.triggered_mine(), None);
    }

    #[test]
    fn revealing_on_mineless_board_wins() {
        let mut session = Session::from_board(Board::empty((2, 2)));

        let outcome = session.reveal((0, 0));

        assert_eq!(outcome, Ok(RevealOutcome::Won));
        assert_eq!(session.phase(), GamePhase::Won);
        assert!(!session.is_ticking());
        assert_eq!(session.board().revealed_count(), 4);
        assert_eq!(session.triggered_mine(), None);
    }

    #[test]
    fn loss_accounting_is_configurable() {
        let board = Board::from_mine_coords((2, 2), &[(0, 0), (1, 1)]).unwrap();
        let mut decrement = Session::from_board(board.clone());
        let mut recount = Session::from_board(board).with_loss_accounting(LossAccounting::Recount);

        decrement.reveal((0, 0)).unwrap();
        recount.reveal((0, 0)).unwrap();

        assert_eq!(decrement.mines_left(), 1);
        assert_eq!(recount.mines_left(), 2);
    }

    #[test]
    fn beginner_game_starts_clean_and_flood_fills() {
        let mut session = Session::with_seed(GameConfig::beginner(), 1234);

        assert_eq!(session.config(), GameConfig::beginner());
        assert_eq!(session.mines_left(), 10);
        assert!(!session.state().started);
        assert!(!session.is_ended());

        let zero = session
            .board()
            .iter_cells()
            .find(|&(pos, cell)| !cell.mined && session.board().adjacent_mine_count(pos) == 0)
            .map(|(pos, _)| pos)
            .expect("a beginner board always has a zero cell");

        assert_eq!(session.reveal(zero).unwrap(), RevealOutcome::Revealed);

        let board = session.board();
        assert_eq!(board[zero].val, Some(0));
        assert!(board.revealed_count() > 1);
        assert!(board.iter_cells().filter(|(_, cell)| cell.mined).all(|(_, cell)| !cell.revealed));
        assert!(session.state().started);
    }

    #[test]
    fn reset_with_seed_starts_over() {
        let mut session = Session::with_seed(GameConfig::beginner(), 5);
        let mine = session
            .board()
            .iter_cells()
            .find(|(_, cell)| cell.mined)
            .map(|(pos, _)| pos)
            .unwrap();
        session.reveal(mine).unwrap();
        assert!(session.is_ended());

        session.reset_with_seed(6);

        assert_eq!(session.phase(), GamePhase::NotStarted);
        assert_eq!(session.triggered_mine(), None);
        assert_eq!(session.board().revealed_count(), 0);
        assert_eq!(session.mines_left(), 10);
    }

    #[cfg(feature = "std")]
    #[test]
    fn random_session_uses_config() {
        let mut session = Session::new(GameConfig::new(8, 5, 7));

        assert_eq!(session.board().size(), (5, 8));
        assert_eq!(session.mines_left(), 7);
        assert_eq!(session.elapsed_secs(), 0);

        session.reset();
        assert_eq!(session.board().mine_count(), 7);
    }
}
