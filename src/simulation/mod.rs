//! The round loop, its configuration, and everything it records.
mod config;
mod phase;
mod report;
mod simulation;
mod trajectory;

pub use config::*;
pub use phase::*;
pub use report::*;
pub use simulation::*;
pub use trajectory::*;
