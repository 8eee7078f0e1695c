use rand::Rng;
use serde::Serialize;

/// The round at which an agent intends to stop the centipede game.
///
/// Always within [`Strategy::MIN`, `Strategy::MAX`]. The only ways to
/// build one are the checked conversion from `u8`, the enumeration in
/// [`Strategy::all`], and uniform draws that are clamped to the range.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub struct Strategy(u8);

impl Strategy {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(6);
    /// number of distinct strategies
    pub const COUNT: usize = (Self::MAX.0 - Self::MIN.0 + 1) as usize;

    /// every strategy in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }

    /// uniform draw from [1, min(length / 2 + 1, 6)],
    /// the initial strategy of a freshly created agent
    pub fn random<R>(length: usize, rng: &mut R) -> Self
    where
        R: Rng,
    {
        let ceiling = (length / 2 + 1).min(Self::MAX.0 as usize) as u8;
        Self(rng.random_range(Self::MIN.0..=ceiling))
    }

    /// zero-based position within [`Strategy::all`]
    pub fn index(&self) -> usize {
        (self.0 - Self::MIN.0) as usize
    }

    pub fn is_max(&self) -> bool {
        *self == Self::MAX
    }
}

impl TryFrom<u8> for Strategy {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        anyhow::ensure!(
            (Self::MIN.0..=Self::MAX.0).contains(&n),
            "strategy {} outside [{}, {}]",
            n,
            Self::MIN,
            Self::MAX
        );
        Ok(Self(n))
    }
}

impl From<Strategy> for u8 {
    fn from(s: Strategy) -> u8 {
        s.0
    }
}

impl From<Strategy> for usize {
    fn from(s: Strategy) -> usize {
        s.0 as usize
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn enumerates_one_through_six() {
        let all = Strategy::all().map(u8::from).collect::<Vec<_>>();
        assert_eq!(all, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(all.len(), Strategy::COUNT);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Strategy::try_from(0).is_err());
        assert!(Strategy::try_from(7).is_err());
        assert!(Strategy::try_from(1).is_ok());
        assert!(Strategy::try_from(6).is_ok());
    }

    #[test]
    fn index_matches_enumeration() {
        for (i, s) in Strategy::all().enumerate() {
            assert_eq!(s.index(), i);
        }
    }

    #[test]
    fn random_respects_length() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..256 {
            let s = Strategy::random(4, rng);
            assert!(s >= Strategy::MIN && u8::from(s) <= 3);
        }
        for _ in 0..256 {
            let s = Strategy::random(100, rng);
            assert!(s >= Strategy::MIN && s <= Strategy::MAX);
        }
    }

    #[test]
    fn random_covers_full_range_for_default_length() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let seen = (0..1024)
            .map(|_| Strategy::random(crate::GAME_LENGTH, rng))
            .collect::<std::collections::BTreeSet<_>>();
        assert_eq!(seen.len(), Strategy::COUNT);
    }
}
