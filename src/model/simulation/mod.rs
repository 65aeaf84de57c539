//! The simulation orchestrator.
//!
//! One tick is split in two halves so the scheduler can pause the first:
//! [`Simulation::update`] rebuilds the grid, resolves collisions and advances
//! the population; [`Simulation::publish`] fans the population out to
//! subscribers and samples statistics.

use rand_chacha::ChaCha8Rng;
use uuid::Uuid;
use vivarium_core::clock::Clock;
use vivarium_core::config::AppConfig;
use vivarium_core::population::find_oldest;
use vivarium_core::{TickMetrics, World};
use vivarium_data::{Creature, Stats, Vec2};

use crate::model::subscription::Subscriber;

pub mod handlers;
pub mod init;
pub mod update;

pub use handlers::{
    CollisionHandler, CollisionSummary, EntityHandler, GridCollisions, Handlers, StatsCollector,
    SubscriptionHandler,
};

pub struct Simulation {
    config: AppConfig,
    seed: u64,
    rng: ChaCha8Rng,
    world: World,
    creatures: Vec<Creature>,
    clock: Box<dyn Clock>,
    handlers: Handlers,
    metrics: TickMetrics,
    tick: u64,
}

impl Simulation {
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Seed of the current run.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Last tick the work half ran for.
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[inline]
    pub fn metrics(&self) -> &TickMetrics {
        &self.metrics
    }

    pub fn size(&self) -> (f64, f64) {
        (self.world.width, self.world.height)
    }

    pub fn stats(&self) -> Stats {
        self.handlers.stats.snapshot()
    }

    /// Creature whose circle, grown by the pick margin, contains `point`.
    pub fn find_creature(&self, point: Vec2) -> Option<&Creature> {
        let idx = self
            .world
            .find_creature(&self.creatures, point, self.config.creature.pick_margin)?;
        self.creatures.get(idx)
    }

    /// Animal with the deepest lineage.
    pub fn oldest(&self) -> Option<&Creature> {
        find_oldest(&self.creatures).and_then(|idx| self.creatures.get(idx))
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) -> Uuid {
        self.handlers.subscriptions.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, token: Uuid) -> bool {
        self.handlers.subscriptions.unsubscribe(token)
    }
}
