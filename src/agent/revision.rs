use crate::*;
use std::collections::BTreeMap;

/// Winners of successive revision trials, in the order they were played.
///
/// The adopted strategy is the plurality winner. Ties go to the value
/// that shows up first when scanning the trials in order, so the outcome
/// depends only on the trial sequence and never on map ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Revision(Vec<Strategy>);

impl Revision {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// how many trials each strategy won
    pub fn tally(&self) -> BTreeMap<Strategy, usize> {
        self.0.iter().fold(BTreeMap::new(), |mut counts, s| {
            *counts.entry(*s).or_default() += 1;
            counts
        })
    }

    /// most frequent winner, first occurrence breaks ties
    pub fn mode(&self) -> Option<Strategy> {
        let ref counts = self.tally();
        self.0
            .iter()
            .copied()
            .fold(None, |best: Option<Strategy>, s| match best {
                Some(b) if counts[&b] >= counts[&s] => Some(b),
                _ => Some(s),
            })
    }
}

impl FromIterator<Strategy> for Revision {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Strategy>,
    {
        Self(iter.into_iter().collect())
    }
}
