use crate::*;
use serde::Serialize;

/// Mean payoff of every round played, in order. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trajectory(Vec<Utility>);

impl Trajectory {
    pub fn push(&mut self, mean: Utility) {
        debug_assert!(mean.is_finite());
        self.0.push(mean);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn last(&self) -> Option<Utility> {
        self.0.last().copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = Utility> + '_ {
        self.0.iter().copied()
    }
    /// average over all rounds
    pub fn mean(&self) -> Option<Utility> {
        match self.0.len() {
            0 => None,
            n => Some(self.0.iter().sum::<Utility>() / n as Utility),
        }
    }
    pub fn min(&self) -> Option<Utility> {
        self.iter().reduce(Utility::min)
    }
    pub fn max(&self) -> Option<Utility> {
        self.iter().reduce(Utility::max)
    }
}
