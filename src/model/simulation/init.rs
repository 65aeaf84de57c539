use super::{Handlers, Simulation};
use anyhow::Result;
use vivarium_core::clock::{Clock, TickClock, WallClock};
use vivarium_core::config::AppConfig;
use vivarium_core::rng::create_rng;
use vivarium_core::{PopulationManager, TickMetrics, World};
use vivarium_data::Creature;

impl Simulation {
    /// Builds a simulation with the standard handlers.
    pub fn new(config: AppConfig) -> Result<Self> {
        let handlers = Handlers::standard(&config);
        Self::with_handlers(config, handlers)
    }

    /// Builds a simulation around custom handlers.
    pub fn with_handlers(config: AppConfig, mut handlers: Handlers) -> Result<Self> {
        config.validate()?;
        let seed = pick_seed(&config);
        let mut rng = create_rng(seed);
        let mut world = World::new(
            config.world.width,
            config.world.height,
            config.world.grid_size,
        )?;
        let clock = make_clock(&config);
        let creatures = spawn(&config, &world, clock.now(0), &mut rng)?;
        world.update_cells(&creatures);
        handlers.stats.reset(seed);

        tracing::info!(
            seed,
            population = creatures.len(),
            width = config.world.width,
            height = config.world.height,
            "Simulation created"
        );

        Ok(Self {
            metrics: TickMetrics::new(config.stats.log_every),
            config,
            seed,
            rng,
            world,
            creatures,
            clock,
            handlers,
            tick: 0,
        })
    }

    /// Replaces world, population and statistics with a fresh run.
    /// Subscriptions survive. On error the current run is left untouched.
    pub fn restart(&mut self) -> Result<()> {
        let seed = pick_seed(&self.config);
        let mut rng = create_rng(seed);
        let mut world = World::new(
            self.config.world.width,
            self.config.world.height,
            self.config.world.grid_size,
        )?;
        let clock = make_clock(&self.config);
        let creatures = spawn(&self.config, &world, clock.now(self.tick), &mut rng)?;
        world.update_cells(&creatures);

        self.seed = seed;
        self.rng = rng;
        self.world = world;
        self.clock = clock;
        self.creatures = creatures;
        self.handlers.entities.tally_mut().clear();
        self.handlers.stats.reset(seed);
        self.metrics = TickMetrics::new(self.config.stats.log_every);

        tracing::info!(seed, population = self.creatures.len(), "Simulation restarted");
        Ok(())
    }
}

/// Configured seed, or a fresh one from the OS.
fn pick_seed(config: &AppConfig) -> u64 {
    config.world.seed.unwrap_or_else(rand::random)
}

fn make_clock(config: &AppConfig) -> Box<dyn Clock> {
    if config.world.deterministic {
        Box::new(TickClock::new(config.ticker.ticks_per_second))
    } else {
        Box::new(WallClock::new())
    }
}

fn spawn(
    config: &AppConfig,
    world: &World,
    now: f64,
    rng: &mut rand_chacha::ChaCha8Rng,
) -> Result<Vec<Creature>> {
    let creatures = PopulationManager::new(config).spawn(
        config.world.start_mode,
        config.world.initial_population,
        world,
        now,
        rng,
    )?;
    Ok(creatures)
}
