//! Agents and the sampled best-response revision procedure.
mod agent;
mod revision;

pub use agent::*;
pub use revision::*;
