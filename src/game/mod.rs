//! Game primitives: strategies, colors, and the truncated centipede payoff rule.
mod centipede;
mod color;
mod mode;
mod strategy;

pub use centipede::*;
pub use color::*;
pub use mode::*;
pub use strategy::*;
