use crate::*;
use serde::Serialize;

/// Histogram of strategies held by a population, one bin per value 1..=6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Distribution([usize; Strategy::COUNT]);

impl Distribution {
    pub fn count(&self, strategy: Strategy) -> usize {
        self.0[strategy.index()]
    }
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
    pub fn counts(&self) -> &[usize; Strategy::COUNT] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = (Strategy, usize)> + '_ {
        Strategy::all().zip(self.0.iter().copied())
    }
    /// share of the population holding each strategy
    pub fn shares(&self) -> impl Iterator<Item = (Strategy, Utility)> + '_ {
        let total = self.total().max(1) as Utility;
        self.iter().map(move |(s, n)| (s, n as Utility / total))
    }
    /// most common strategy, lowest value on ties
    pub fn dominant(&self) -> Option<Strategy> {
        self.iter()
            .filter(|(_, n)| *n > 0)
            .fold(None, |best: Option<(Strategy, usize)>, (s, n)| match best {
                Some((_, b)) if b >= n => best,
                _ => Some((s, n)),
            })
            .map(|(s, _)| s)
    }
    /// population average of the stopping round
    pub fn mean(&self) -> Utility {
        let total = self.total().max(1) as Utility;
        self.iter()
            .map(|(s, n)| u8::from(s) as Utility * n as Utility)
            .sum::<Utility>()
            / total
    }
}

impl FromIterator<Strategy> for Distribution {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Strategy>,
    {
        iter.into_iter().fold(Self::default(), |mut d, s| {
            d.0[s.index()] += 1;
            d
        })
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (strategy, share) in self.shares() {
            write!(f, "{}:{:>5.1}% ", strategy, 100. * share)?;
        }
        Ok(())
    }
}
