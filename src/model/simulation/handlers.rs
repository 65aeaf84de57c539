//! Capabilities the [`Simulation`](super::Simulation) is assembled from.
//!
//! Each concern of a tick sits behind a trait so tests can swap in fakes.
//! [`Handlers::standard`] wires the production implementations.

use crate::model::subscription::{Subscriber, SubscriptionHub};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;
use vivarium_core::collision::{resolve_all, GridDetector};
use vivarium_core::config::AppConfig;
use vivarium_core::population::PopulationDelta;
use vivarium_core::systems::stats::IntervalCollector;
use vivarium_core::{CollisionDetector, DeathTally, PopulationManager, World};
use vivarium_data::{Creature, Stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionSummary {
    pub events: usize,
    pub meals: usize,
}

/// Rebuilds the grid, detects and resolves one tick of collisions.
pub trait CollisionHandler: Send {
    fn handle(&mut self, world: &mut World, creatures: &mut [Creature], now: f64) -> CollisionSummary;
}

/// Advances the population by one tick and keeps the death tally.
pub trait EntityHandler: Send {
    fn update(&mut self, creatures: &mut Vec<Creature>, now: f64, rng: &mut ChaCha8Rng) -> PopulationDelta;
    fn tally_mut(&mut self) -> &mut DeathTally;
}

pub trait StatsCollector: Send {
    /// May sample at `tick`. Consumes the tally when it does.
    fn collect(&mut self, tick: u64, creatures: &[Creature], tally: &mut DeathTally) -> bool;
    fn snapshot(&self) -> Stats;
    fn reset(&mut self, seed: u64);
}

pub trait SubscriptionHandler: Send {
    fn subscribe(&mut self, subscriber: Subscriber) -> Uuid;
    fn unsubscribe(&mut self, token: Uuid) -> bool;
    fn publish(&mut self, creatures: &[Creature]);
}

pub struct Handlers {
    pub collisions: Box<dyn CollisionHandler>,
    pub entities: Box<dyn EntityHandler>,
    pub stats: Box<dyn StatsCollector>,
    pub subscriptions: Box<dyn SubscriptionHandler>,
}

impl Handlers {
    pub fn standard(config: &AppConfig) -> Self {
        Self {
            collisions: Box::new(GridCollisions::new(
                GridDetector,
                config.creature.eat_cooldown_secs,
            )),
            entities: Box::new(PopulationManager::new(config)),
            stats: Box::new(IntervalCollector::new(0, &config.stats)),
            subscriptions: Box::new(SubscriptionHub::new()),
        }
    }
}

pub struct GridCollisions<D> {
    detector: D,
    cooldown: f64,
}

impl<D: CollisionDetector> GridCollisions<D> {
    pub fn new(detector: D, cooldown: f64) -> Self {
        Self { detector, cooldown }
    }
}

impl<D: CollisionDetector + Send> CollisionHandler for GridCollisions<D> {
    fn handle(&mut self, world: &mut World, creatures: &mut [Creature], now: f64) -> CollisionSummary {
        world.update_cells(creatures);
        let events = self.detector.detect(world, creatures);
        let meals = resolve_all(&events, creatures, world, now, self.cooldown);
        CollisionSummary {
            events: events.len(),
            meals,
        }
    }
}

impl EntityHandler for PopulationManager {
    fn update(&mut self, creatures: &mut Vec<Creature>, now: f64, rng: &mut ChaCha8Rng) -> PopulationDelta {
        self.update_population(creatures, now, rng)
    }

    fn tally_mut(&mut self) -> &mut DeathTally {
        PopulationManager::tally_mut(self)
    }
}

impl StatsCollector for IntervalCollector {
    fn collect(&mut self, tick: u64, creatures: &[Creature], tally: &mut DeathTally) -> bool {
        IntervalCollector::update(self, tick, creatures, tally)
    }

    fn snapshot(&self) -> Stats {
        IntervalCollector::snapshot(self)
    }

    fn reset(&mut self, seed: u64) {
        IntervalCollector::reset(self, seed);
    }
}

impl SubscriptionHandler for SubscriptionHub {
    fn subscribe(&mut self, subscriber: Subscriber) -> Uuid {
        SubscriptionHub::subscribe(self, subscriber)
    }

    fn unsubscribe(&mut self, token: Uuid) -> bool {
        SubscriptionHub::unsubscribe(self, token)
    }

    fn publish(&mut self, creatures: &[Creature]) {
        SubscriptionHub::publish(self, creatures);
    }
}
