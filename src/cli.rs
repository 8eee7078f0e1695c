use crate::*;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate the evolutionary centipede game", long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = GAME_ROUNDS, help = "Total rounds, trajectory holds one fewer")]
    pub rounds: usize,
    #[arg(long, default_value_t = GAME_LENGTH, help = "Cooperative payoff ceiling")]
    pub length: usize,
    #[arg(long, default_value_t = POPULATION_SIZE, help = "Agents per color")]
    pub population: usize,
    #[arg(long, default_value_t = REVIEW_FREQUENCY, help = "Rounds between review phases")]
    pub frequency: usize,
    #[arg(long, default_value_t = REVISION_LENGTH, help = "Sampling trials per revision")]
    pub revisions: usize,
    #[arg(long, value_enum, default_value_t = Mode::Random)]
    pub mode: Mode,
    #[arg(long, help = "Seed for a reproducible run")]
    pub seed: Option<u64>,
    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            game_rounds: args.rounds,
            game_length: args.length,
            population_size: args.population,
            review_frequency: args.frequency,
            revision_length: args.revisions,
            mode: args.mode,
            seed: args.seed,
        }
    }
}
