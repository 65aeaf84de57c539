//! Tick metrics for the simulation.
//!
//! Provides structured logging and counters for monitoring simulation
//! throughput and population health.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Per-simulation tick metrics.
pub struct TickMetrics {
    tick_count: AtomicU64,
    population: AtomicU64,
    busiest_tick_us: AtomicU64,
    log_every: u64,
    start_time: Instant,
}

impl Default for TickMetrics {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl TickMetrics {
    /// Creates a collector that logs every `log_every` ticks (0 disables logging).
    #[must_use]
    pub fn new(log_every: u64) -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            population: AtomicU64::new(0),
            busiest_tick_us: AtomicU64::new(0),
            log_every,
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, population: usize, collisions: usize) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.population.store(population as u64, Ordering::Relaxed);
        self.busiest_tick_us
            .fetch_max(duration.as_micros() as u64, Ordering::Relaxed);

        if self.log_every > 0 && tick % self.log_every == 0 {
            tracing::info!(
                tick = tick,
                population = population,
                collisions = collisions,
                duration_ms = duration.as_millis() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.load(Ordering::Relaxed)
    }

    /// Slowest tick seen so far.
    #[must_use]
    pub fn busiest_tick(&self) -> Duration {
        Duration::from_micros(self.busiest_tick_us.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` wins over `default_filter`.
/// Calling it more than once is harmless.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
