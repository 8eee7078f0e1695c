//! Simulate Binary
//!
//! Runs one evolutionary centipede simulation and prints its report.
//!
//! Options: --rounds, --length, --population, --frequency, --revisions, --seed, --json

use centipede::*;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    log();
    let ref args = Args::parse();
    let report = Simulation::try_from(Config::from(args))?.run();
    match args.json {
        true => println!("{}", report.json()?),
        false => print!("{}", report),
    }
    Ok(())
}
