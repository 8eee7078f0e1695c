use crate::*;
use serde::Serialize;

/// Parameters of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Config {
    /// total rounds; the loop plays rounds 1..game_rounds
    pub game_rounds: usize,
    /// cooperative payoff ceiling
    pub game_length: usize,
    /// agents per color
    pub population_size: usize,
    /// rounds between review phases
    pub review_frequency: usize,
    /// trials per strategy revision
    pub revision_length: usize,
    pub mode: Mode,
    /// fixed seed for reproducible runs
    pub seed: Option<u64>,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.game_rounds > 0, "game_rounds must be positive");
        anyhow::ensure!(self.game_length > 0, "game_length must be positive");
        anyhow::ensure!(self.population_size > 0, "population_size must be positive");
        anyhow::ensure!(self.review_frequency > 0, "review_frequency must be positive");
        anyhow::ensure!(self.revision_length > 0, "revision_length must be positive");
        Ok(())
    }

    pub fn game(&self) -> Centipede {
        Centipede::new(self.game_length)
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game_rounds: GAME_ROUNDS,
            game_length: GAME_LENGTH,
            population_size: POPULATION_SIZE,
            review_frequency: REVIEW_FREQUENCY,
            revision_length: REVISION_LENGTH,
            mode: Mode::default(),
            seed: None,
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "rounds {} length {} population {} frequency {} revisions {} mode {}",
            self.game_rounds,
            self.game_length,
            self.population_size,
            self.review_frequency,
            self.revision_length,
            self.mode,
        )
    }
}
