use crate::*;
use serde::Serialize;

/// Strategy distributions of both populations right after a review phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub round: usize,
    pub yellow: Distribution,
    pub blue: Distribution,
}

/// Everything a finished run hands to plotting and analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub config: Config,
    pub seed: u64,
    pub trajectory: Trajectory,
    pub yellow: Distribution,
    pub blue: Distribution,
    pub history: Vec<Snapshot>,
}

impl Report {
    pub fn json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}  seed {}", self.config, self.seed)?;
        writeln!(f, "Rounds: {}  Mean: {:.4}  Last: {:.4}",
            self.trajectory.len(),
            self.trajectory.mean().unwrap_or_default(),
            self.trajectory.last().unwrap_or_default(),
        )?;
        writeln!(f, "Range: [{:.4}, {:.4}]  Reviews: {}",
            self.trajectory.min().unwrap_or_default(),
            self.trajectory.max().unwrap_or_default(),
            self.history.len(),
        )?;
        writeln!(f, "┌────────┬──────────┬──────────┐")?;
        writeln!(f, "│  Stop  │   Yellow │     Blue │")?;
        writeln!(f, "├────────┼──────────┼──────────┤")?;
        for ((strategy, y), (_, b)) in self.yellow.iter().zip(self.blue.iter()) {
            writeln!(f, "│ {:>6} │ {:>8} │ {:>8} │", strategy, y, b)?;
        }
        writeln!(f, "├────────┼──────────┼──────────┤")?;
        writeln!(f, "│   mean │ {:>8.3} │ {:>8.3} │", self.yellow.mean(), self.blue.mean())?;
        writeln!(f, "│   mode │ {:>8} │ {:>8} │",
            self.yellow.dominant().map(|s| s.to_string()).unwrap_or_default(),
            self.blue.dominant().map(|s| s.to_string()).unwrap_or_default(),
        )?;
        writeln!(f, "└────────┴──────────┴──────────┘")?;
        Ok(())
    }
}
