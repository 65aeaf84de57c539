//! Thread-safe control surface over a running simulation.
//!
//! [`SimulationHandle`] is what collaborators such as a transport layer or a
//! renderer hold. Every call serialises against the tick loop through the
//! ticker's lock, so reads always observe a whole tick.

pub mod shutdown;

pub use shutdown::ShutdownManager;

use anyhow::Result;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use uuid::Uuid;
use vivarium_core::config::AppConfig;
use vivarium_data::{Creature, Stats, Vec2};

use crate::model::simulation::Simulation;
use crate::model::subscription::Subscriber;
use crate::model::ticker::Ticker;

#[derive(Clone)]
pub struct SimulationHandle {
    ticker: Arc<Ticker<Simulation>>,
    runner: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl SimulationHandle {
    pub fn new(config: AppConfig) -> Result<Self> {
        let ticks_per_second = config.ticker.ticks_per_second;
        let simulation = Simulation::new(config)?;
        Ok(Self::from_simulation(simulation, ticks_per_second))
    }

    pub fn from_simulation(simulation: Simulation, ticks_per_second: i64) -> Self {
        Self {
            ticker: Arc::new(Ticker::new(simulation, ticks_per_second)),
            runner: Arc::new(Mutex::new(None)),
        }
    }

    /// Spawns the tick loop on its own thread. No-op if already running.
    pub fn start(&self) -> Result<()> {
        if !self.ticker.arm() {
            return Ok(());
        }
        let ticker = Arc::clone(&self.ticker);
        let handle = std::thread::Builder::new()
            .name("vivarium-ticker".into())
            .spawn(move || {
                ticker.run(|tick, sim| sim.update(tick), |tick, sim| sim.publish(tick));
            })?;
        *self.runner() = Some(handle);
        Ok(())
    }

    /// Asks the loop to exit after the current tick. Does not wait.
    pub fn stop(&self) {
        self.ticker.stop();
        tracing::info!("Simulation stop requested");
    }

    /// Stops the loop once `ticks` ticks have run.
    pub fn stop_after(&self, ticks: u64) {
        self.ticker.stop_after(ticks);
    }

    /// Waits for the tick thread to exit.
    pub fn join(&self) -> Result<()> {
        let handle = self.runner().take();
        if let Some(handle) = handle {
            handle
                .join()
                .map_err(|_| anyhow::anyhow!("ticker thread panicked"))?;
        }
        Ok(())
    }

    fn runner(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.runner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn pause(&self) {
        self.ticker.pause();
    }

    pub fn resume(&self) {
        self.ticker.resume();
    }

    /// Returns true if the simulation is now paused.
    pub fn toggle_pause_resume(&self) -> bool {
        self.ticker.toggle_pause_resume()
    }

    pub fn is_paused(&self) -> bool {
        self.ticker.is_paused()
    }

    /// Swaps in a fresh run while the loop is held between ticks.
    pub fn restart(&self) -> Result<()> {
        self.ticker.lock().restart()
    }

    pub fn tick(&self) -> u64 {
        self.ticker.tick()
    }

    pub fn ticks_per_second(&self) -> i64 {
        self.ticker.ticks_per_second()
    }

    pub fn set_ticks_per_second(&self, ticks_per_second: i64) {
        self.ticker.set_ticks_per_second(ticks_per_second);
    }

    pub fn size(&self) -> (f64, f64) {
        self.ticker.lock().size()
    }

    pub fn seed(&self) -> u64 {
        self.ticker.lock().seed()
    }

    /// Copy of the current population.
    pub fn creatures(&self) -> Vec<Creature> {
        self.ticker.lock().creatures().to_vec()
    }

    pub fn population(&self) -> usize {
        self.ticker.lock().creatures().len()
    }

    pub fn stats(&self) -> Stats {
        self.ticker.lock().stats()
    }

    pub fn find_creature(&self, point: Vec2) -> Option<Creature> {
        self.ticker.lock().find_creature(point).cloned()
    }

    pub fn oldest(&self) -> Option<Creature> {
        self.ticker.lock().oldest().cloned()
    }

    pub fn subscribe(&self, subscriber: Subscriber) -> Uuid {
        self.ticker.lock().subscribe(subscriber)
    }

    pub fn unsubscribe(&self, token: Uuid) -> bool {
        self.ticker.lock().unsubscribe(token)
    }

    /// Runs `f` with exclusive access to the simulation.
    pub fn with_simulation<T>(&self, f: impl FnOnce(&mut Simulation) -> T) -> T {
        let mut guard = self.ticker.lock();
        f(&mut guard)
    }
}
