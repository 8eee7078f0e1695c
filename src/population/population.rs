use crate::*;
use rand::Rng;
use rand::seq::IndexedRandom;

/// All agents of one color.
///
/// Membership is fixed at construction. Only strategies change,
/// through [`Population::review`] or explicit assignment.
#[derive(Debug, Clone)]
pub struct Population {
    color: Color,
    agents: Vec<Agent>,
    trials: usize,
}

impl Population {
    pub fn new<R>(
        color: Color,
        size: usize,
        game: Centipede,
        trials: usize,
        mode: Mode,
        rng: &mut R,
    ) -> anyhow::Result<Self>
    where
        R: Rng,
    {
        anyhow::ensure!(size > 0, "{} population must not be empty", color);
        anyhow::ensure!(trials > 0, "{} population needs at least one revision trial", color);
        let agents = (0..size)
            .map(|id| Agent::random(id, color, game, mode, rng))
            .collect::<Vec<_>>();
        Ok(Self {
            color,
            agents,
            trials,
        })
    }

    pub fn color(&self) -> Color {
        self.color
    }
    pub fn size(&self) -> usize {
        self.agents.len()
    }
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }
    /// mutable view that cannot grow or shrink the population
    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }
    pub fn get(&self, index: usize) -> &Agent {
        &self.agents[index]
    }

    /// uniform draw with replacement
    pub fn sample<R>(&self, rng: &mut R) -> &Agent
    where
        R: Rng,
    {
        self.agents.choose(rng).expect("populations are never empty")
    }

    /// raw strategy of every agent, in membership order
    pub fn strategies(&self) -> Vec<Strategy> {
        self.agents.iter().map(Agent::strategy).collect()
    }

    pub fn distribution(&self) -> Distribution {
        self.agents.iter().map(Agent::strategy).collect()
    }

    /// every agent revises against `opponents` in membership order.
    /// opponents are read live, so whichever population reviews second
    /// sees the first population's revised strategies.
    pub fn review<R>(&mut self, opponents: &Population, rng: &mut R)
    where
        R: Rng,
    {
        debug_assert!(opponents.color() == self.color.opponent());
        let trials = self.trials;
        for agent in self.agents.iter_mut() {
            agent.revise(trials, opponents, rng);
        }
        log::debug!("{:<6} reviewed  {}", self.color, self.distribution());
    }
}
