use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Board;
}

/// Generates a board for `config` with a seed drawn from the thread-local RNG.
#[cfg(feature = "std")]
pub fn generate(config: GameConfig) -> Board {
    use rand::Rng;

    RandomBoardGenerator::new(rand::rng().random()).generate(config)
}
