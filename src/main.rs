//! Play the Monty Hall strategies and print how often each one wins the car.
//!
//! Usage: `monty-hall-sim <SIMULATION_COUNT> [--doors N]`

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::{error, info};

use monty_hall_sim::engine::{DEFAULT_DOOR_COUNT, SimulationEngine};
use monty_hall_sim::error::SimulationError;

#[derive(Parser, Debug)]
#[command(name = "monty-hall-sim")]
#[command(about = "Compare Monty Hall door-switching strategies")]
struct Args {
    /// Number of trials; each trial plays every strategy once
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    simulation_count: u64,

    /// Number of doors in the layout
    #[arg(long, default_value_t = DEFAULT_DOOR_COUNT, value_parser = parse_door_count)]
    doors: usize,
}

fn parse_door_count(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("at least one door is required".to_string()),
        Ok(count) => Ok(count),
        Err(e) => Err(e.to_string()),
    }
}

fn run(args: &Args) -> Result<String, SimulationError> {
    let mut engine = SimulationEngine::from_door_count(args.doors)?;

    info!(
        trials = args.simulation_count,
        doors = args.doors,
        "Performing simulations..."
    );
    engine.run_trials(args.simulation_count)?;

    engine.into_results().summary()
}

fn main() {
    monty_hall_sim::logging::init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit();
        }
        Err(_) => {
            println!("{}", Args::command().render_usage());
            return;
        }
    };

    match run(&args) {
        Ok(summary) => println!("{summary}"),
        Err(e) => error!("Simulation aborted: {}", e),
    }
}
