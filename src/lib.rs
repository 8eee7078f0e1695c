//! Evolutionary centipede game.
//!
//! Two populations of agents, one per [`Color`], repeatedly play a truncated
//! centipede game against randomly matched opponents. Every few rounds each
//! agent revises its [`Strategy`] by sampled best response against the other
//! population, keeping whichever candidate wins the most trials. The
//! [`Simulation`] records the mean payoff of every round.
//!
//! # Module Structure
//!
//! - `game` — Strategy, Color, Mode and the payoff rule
//! - `agent` — Agent state and the revision procedure
//! - `population` — Fixed-size populations and strategy distributions
//! - `simulation` — Configuration, round loop, trajectory and report
//! - `cli` — Command line arguments (feature `cli`)

mod agent;
#[cfg(feature = "cli")]
mod cli;
mod game;
mod population;
mod simulation;

pub use agent::*;
#[cfg(feature = "cli")]
pub use cli::*;
pub use game::*;
pub use population::*;
pub use simulation::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoffs, pair means and trajectory values.
pub type Utility = f32;
/// Pair of payoffs, first mover in slot 0 and second mover in slot 1.
pub type Payoff = (Utility, Utility);

// ============================================================================
// SIMULATION DEFAULTS
// ============================================================================
/// Number of rounds. The loop runs rounds 1..GAME_ROUNDS.
pub const GAME_ROUNDS: usize = 100;
/// Cooperative payoff ceiling when both agents continue to the end.
pub const GAME_LENGTH: usize = 10;
/// Agents per color.
pub const POPULATION_SIZE: usize = 1000;
/// Rounds between review phases.
pub const REVIEW_FREQUENCY: usize = 1;
/// Sampling trials per strategy revision.
pub const REVISION_LENGTH: usize = 1;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
