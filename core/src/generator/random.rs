use alloc::vec::Vec;

use super::*;

/// Generation strategy that picks the mined cells uniformly at random, deterministically for a
/// given seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let (height, width) = config.size();
        let total_cells = config.total_cells();
        let mut board = Board::empty((height, width));

        // optimize for full boards
        if config.total_mines >= total_cells {
            if config.total_mines > total_cells {
                log::warn!(
                    "Board already full, generated anyway, requested {} but only fits {}",
                    config.total_mines,
                    total_cells
                );
            }
            board.fill_mines();
            return board;
        }

        // Fisher-Yates over the flattened cell indices, the first `total_mines` get a mine
        let mut indices: Vec<CellCount> = (0..total_cells).collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        indices.shuffle(&mut rng);

        let width = CellCount::from(width);
        for &index in &indices[..usize::from(config.total_mines)] {
            // both quotient and remainder fit a coordinate
            let coords = ((index / width) as Coord, (index % width) as Coord);
            board.place_mine(coords);
        }

        log::debug!(
            "Generated {}x{} board with {} mines from seed {}",
            config.width,
            config.height,
            board.mine_count(),
            self.seed
        );
        board
    }
}
