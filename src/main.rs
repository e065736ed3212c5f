mod control;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use control::{simulate_traffic_system, SimulationConfig};

#[derive(Parser)]
#[command(name = "traffic_control")]
#[command(about = "City traffic-management simulation")]
struct Cli {
    /// Number of traffic-update iterations to run
    #[arg(long, default_value = "10")]
    iterations: u32,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Delay between iterations in milliseconds
    #[arg(long, default_value = "0")]
    delay_ms: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = SimulationConfig {
        iterations: cli.iterations,
        seed: cli.seed,
        step_delay: Duration::from_millis(cli.delay_ms),
    };

    simulate_traffic_system(config)
}
