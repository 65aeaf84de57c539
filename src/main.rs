use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use vivarium_core::config::AppConfig;
use vivarium_core::init_logging;
use vivarium_lib::app::{ShutdownManager, SimulationHandle};

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless Vivarium runner", long_about = None)]
struct Args {
    /// Config file path. Missing files fall back to defaults.
    #[arg(short, long, default_value = "vivarium.toml")]
    config: String,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Initial population size
    #[arg(long)]
    population: Option<usize>,

    /// Stop after this many ticks. Runs until Ctrl+C otherwise.
    #[arg(long)]
    ticks: Option<u64>,

    /// Target ticks per second
    #[arg(long)]
    tps: Option<i64>,

    /// Derive cooldown time from ticks so seeded runs replay exactly
    #[arg(long)]
    deterministic: bool,

    /// Print the final statistics as JSON
    #[arg(long)]
    stats_json: bool,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(seed) = self.seed {
            config.world.seed = Some(seed);
        }
        if let Some(population) = self.population {
            config.world.initial_population = population;
        }
        if let Some(tps) = self.tps {
            config.ticker.ticks_per_second = tps;
        }
        if self.deterministic {
            config.world.deterministic = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging("info");
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    args.apply(&mut config);

    let handle = SimulationHandle::new(config)?;
    if let Some(ticks) = args.ticks {
        handle.stop_after(ticks);
    }

    let shutdown = Arc::new(ShutdownManager::new(handle.clone()));
    shutdown.listen_for_ctrl_c();

    handle.start()?;
    let waiter = handle.clone();
    tokio::task::spawn_blocking(move || waiter.join()).await??;

    let stats = handle.stats();
    if args.stats_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        tracing::info!(
            seed = stats.seed,
            ticks = handle.tick(),
            population = handle.population(),
            animals = stats.current.animal.population,
            plants = stats.current.plant.population,
            "Simulation finished"
        );
    }
    Ok(())
}
