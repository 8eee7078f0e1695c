use crate::*;
use rand::Rng;
use serde::Serialize;

/// A member of one population.
///
/// Agents never hold references to other agents. Every interaction
/// goes through [`Population::sample`] on the opposing population.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agent {
    id: usize,
    color: Color,
    strategy: Strategy,
    game: Centipede,
    mode: Mode,
}

impl Agent {
    pub fn new(id: usize, color: Color, strategy: Strategy, game: Centipede, mode: Mode) -> Self {
        Self {
            id,
            color,
            strategy,
            game,
            mode,
        }
    }

    /// fresh agent with a uniformly drawn initial strategy
    pub fn random<R>(id: usize, color: Color, game: Centipede, mode: Mode, rng: &mut R) -> Self
    where
        R: Rng,
    {
        Self::new(id, color, Strategy::random(game.length(), rng), game, mode)
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    pub fn assign(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// my payoff had I played `candidate` against `opponent`,
    /// seated according to my own color
    pub fn evaluate(&self, candidate: Strategy, opponent: &Agent) -> Utility {
        debug_assert!(opponent.color() == self.color.opponent());
        match self.color {
            Color::Yellow => self.game.utility(self.color, candidate, opponent.strategy()),
            Color::Blue => self.game.utility(self.color, opponent.strategy(), candidate),
        }
    }

    /// one revision trial: every candidate faces a freshly sampled
    /// opponent and the best candidate wins, lowest value on ties
    pub fn trial<R>(&self, opponents: &Population, rng: &mut R) -> Strategy
    where
        R: Rng,
    {
        Strategy::all()
            .map(|candidate| (candidate, self.evaluate(candidate, opponents.sample(rng))))
            .fold(None, |best: Option<(Strategy, Utility)>, (s, u)| match best {
                Some((_, b)) if b >= u => best,
                _ => Some((s, u)),
            })
            .map(|(s, _)| s)
            .expect("strategy space is non-empty")
    }

    /// run `trials` trials against `opponents` and adopt the plurality
    /// winner. zero trials leaves the strategy untouched.
    pub fn revise<R>(&mut self, trials: usize, opponents: &Population, rng: &mut R) -> Strategy
    where
        R: Rng,
    {
        let revision = (0..trials)
            .map(|_| self.trial(opponents, rng))
            .collect::<Revision>();
        if let Some(winner) = revision.mode() {
            log::trace!("{} agent {:>4} ({}) {} -> {}", self.color, self.id, self.mode, self.strategy, winner);
            self.strategy = winner;
        }
        self.strategy
    }
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}#{} stops at {}", self.color, self.id, self.strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn s(n: u8) -> Strategy {
        Strategy::try_from(n).unwrap()
    }

    fn fixed(color: Color, strategy: Strategy, rng: &mut SmallRng) -> Population {
        let mut population =
            Population::new(color, 16, Centipede::default(), 1, Mode::Random, rng).unwrap();
        population
            .agents_mut()
            .iter_mut()
            .for_each(|agent| agent.assign(strategy));
        population
    }

    #[test]
    fn evaluate_uses_own_seat() {
        let game = Centipede::default();
        let yellow = Agent::new(0, Color::Yellow, s(1), game, Mode::Random);
        let blue = Agent::new(0, Color::Blue, s(2), game, Mode::Random);
        assert_eq!(yellow.evaluate(s(3), &blue), 1.);
        assert_eq!(blue.evaluate(s(2), &Agent::new(1, Color::Yellow, s(3), game, Mode::Random)), 5.);
    }

    #[test]
    fn yellow_best_response_to_three_is_three() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let blues = fixed(Color::Blue, s(3), rng);
        let mut agent = Agent::new(0, Color::Yellow, s(1), Centipede::default(), Mode::Random);
        assert_eq!(agent.revise(100, &blues, rng), s(3));
        assert_eq!(agent.strategy(), s(3));
    }

    #[test]
    fn blue_best_response_to_three_is_two() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let yellows = fixed(Color::Yellow, s(3), rng);
        let mut agent = Agent::new(0, Color::Blue, s(6), Centipede::default(), Mode::Random);
        assert_eq!(agent.revise(100, &yellows, rng), s(2));
    }

    #[test]
    fn ties_resolve_to_lowest_candidate() {
        // against a blue 1 every yellow candidate except 1 earns -1,
        // and candidate 1 earns 0, so 1 wins outright
        let ref mut rng = SmallRng::seed_from_u64(0);
        let blues = fixed(Color::Blue, s(1), rng);
        let agent = Agent::new(0, Color::Yellow, s(4), Centipede::default(), Mode::Random);
        assert_eq!(agent.trial(&blues, rng), s(1));
        // against a yellow 1 every blue candidate earns 0, a full tie
        let yellows = fixed(Color::Yellow, s(1), rng);
        let agent = Agent::new(0, Color::Blue, s(4), Centipede::default(), Mode::Random);
        assert_eq!(agent.trial(&yellows, rng), s(1));
    }

    #[test]
    fn zero_trials_keep_strategy() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let blues = fixed(Color::Blue, s(3), rng);
        let mut agent = Agent::new(0, Color::Yellow, s(5), Centipede::default(), Mode::Random);
        assert_eq!(agent.revise(0, &blues, rng), s(5));
    }

    #[test]
    fn cooperation_pays_against_full_cooperators() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let blues = fixed(Color::Blue, Strategy::MAX, rng);
        let mut agent = Agent::new(0, Color::Yellow, s(2), Centipede::new(20), Mode::Random);
        assert_eq!(agent.revise(10, &blues, rng), Strategy::MAX);
    }

    #[test]
    fn revision_stays_in_range() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let blues = Population::new(Color::Blue, 32, Centipede::default(), 1, Mode::Random, rng).unwrap();
        let mut agent = Agent::random(0, Color::Yellow, Centipede::default(), Mode::Random, rng);
        for _ in 0..32 {
            let s = agent.revise(3, &blues, rng);
            assert!(s >= Strategy::MIN && s <= Strategy::MAX);
        }
    }
}
