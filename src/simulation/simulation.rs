use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Two populations playing the centipede game round after round.
///
/// Each round draws independent random permutations of both
/// populations and pairs them index by index, so partners are
/// rematched every round. Rounds divisible by the review frequency
/// open a review phase between drawing and playing the matches:
/// yellow revises against blue, then blue revises against the
/// already revised yellow.
///
/// All randomness comes from one seeded [`SmallRng`], so a run is
/// fully determined by its [`Config`] and seed.
pub struct Simulation {
    config: Config,
    seed: u64,
    round: usize,
    phase: Phase,
    yellow: Population,
    blue: Population,
    trajectory: Trajectory,
    history: Vec<Snapshot>,
    pending: Option<(Vec<usize>, Vec<usize>)>,
    rng: SmallRng,
}

impl Simulation {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = SmallRng::seed_from_u64(seed);
        let game = config.game();
        let size = config.population_size;
        let trials = config.revision_length;
        let yellow = Population::new(Color::Yellow, size, game, trials, config.mode, &mut rng)?;
        let blue = Population::new(Color::Blue, size, game, trials, config.mode, &mut rng)?;
        log::info!("{}  seed {}", config, seed);
        Ok(Self {
            config,
            seed,
            round: 1,
            phase: Phase::Initializing,
            yellow,
            blue,
            trajectory: Trajectory::default(),
            history: Vec::new(),
            pending: None,
            rng,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    /// next round to be played, 1-indexed
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn yellow(&self) -> &Population {
        &self.yellow
    }
    pub fn blue(&self) -> &Population {
        &self.blue
    }
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// advance the state machine by one step. a round due for review
    /// takes two steps: the first revises both populations and stops in
    /// [`Phase::ReviewPhase`], the second plays the matches drawn before
    /// the review. returns false once every round has been played.
    pub fn step(&mut self) -> bool {
        if self.phase.is_finished() || self.round >= self.config.game_rounds {
            self.phase = Phase::Finished;
            return false;
        }
        match self.pending.take() {
            Some(pairing) => self.play(pairing),
            None => {
                let pairing = self.pairing();
                if self.round % self.config.review_frequency == 0 {
                    self.review();
                    self.pending = Some(pairing);
                } else {
                    self.play(pairing);
                }
            }
        }
        true
    }

    /// play every remaining round and summarize
    pub fn run(mut self) -> Report {
        while self.step() {}
        log::info!(
            "finished {} rounds, mean payoff {:.4}",
            self.trajectory.len(),
            self.trajectory.mean().unwrap_or_default()
        );
        self.report()
    }

    pub fn report(&self) -> Report {
        Report {
            config: self.config,
            seed: self.seed,
            trajectory: self.trajectory.clone(),
            yellow: self.yellow.distribution(),
            blue: self.blue.distribution(),
            history: self.history.clone(),
        }
    }

    /// independent permutations of both populations, paired by index
    fn pairing(&mut self) -> (Vec<usize>, Vec<usize>) {
        let n = self.config.population_size;
        let mut yellows = (0..n).collect::<Vec<usize>>();
        let mut blues = (0..n).collect::<Vec<usize>>();
        yellows.shuffle(&mut self.rng);
        blues.shuffle(&mut self.rng);
        (yellows, blues)
    }

    fn play(&mut self, (yellows, blues): (Vec<usize>, Vec<usize>)) {
        self.phase = Phase::RoundInProgress;
        let game = self.config.game();
        let mean = yellows
            .iter()
            .zip(blues.iter())
            .map(|(&y, &b)| game.payoff(self.yellow.get(y).strategy(), self.blue.get(b).strategy()))
            .map(|(p, q)| (p + q) / 2.)
            .sum::<Utility>()
            / yellows.len() as Utility;
        log::debug!("round {:>6} mean payoff {:>8.4}", self.round, mean);
        self.trajectory.push(mean);
        self.round += 1;
        if self.round >= self.config.game_rounds {
            self.phase = Phase::Finished;
        }
    }

    fn review(&mut self) {
        self.phase = Phase::ReviewPhase;
        self.yellow.review(&self.blue, &mut self.rng);
        self.blue.review(&self.yellow, &mut self.rng);
        let snapshot = Snapshot {
            round: self.round,
            yellow: self.yellow.distribution(),
            blue: self.blue.distribution(),
        };
        log::info!("round {:>6} yellow {}", snapshot.round, snapshot.yellow);
        log::info!("round {:>6} blue   {}", snapshot.round, snapshot.blue);
        self.history.push(snapshot);
    }
}

impl TryFrom<Config> for Simulation {
    type Error = anyhow::Error;
    fn try_from(config: Config) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}
