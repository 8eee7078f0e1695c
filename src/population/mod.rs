//! Fixed-size populations of agents and their strategy distributions.
mod distribution;
mod population;

pub use distribution::*;
pub use population::*;
