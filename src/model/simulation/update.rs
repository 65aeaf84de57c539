use super::Simulation;
use std::time::Instant;

impl Simulation {
    /// Work half of a tick: grid rebuild, collisions, population update.
    /// The grid is rebuilt again at the end so point lookups index the
    /// post-update collection.
    pub fn update(&mut self, tick: u64) {
        let started = Instant::now();
        self.tick = tick;
        let now = self.clock.now(tick);

        let collisions = self
            .handlers
            .collisions
            .handle(&mut self.world, &mut self.creatures, now);
        let delta = self
            .handlers
            .entities
            .update(&mut self.creatures, now, &mut self.rng);
        self.world.update_cells(&self.creatures);

        self.metrics
            .record_tick(started.elapsed(), self.creatures.len(), collisions.events);
        tracing::trace!(
            tick,
            births = delta.births,
            deaths = delta.deaths,
            meals = collisions.meals,
            "Tick"
        );
    }

    /// Always-run half of a tick: fan-out and stats sampling.
    pub fn publish(&mut self, tick: u64) {
        let handlers = &mut self.handlers;
        handlers.subscriptions.publish(&self.creatures);
        handlers
            .stats
            .collect(tick, &self.creatures, handlers.entities.tally_mut());
    }

    /// Runs both halves for the next tick without a scheduler.
    pub fn step(&mut self) -> u64 {
        let tick = self.tick + 1;
        self.update(tick);
        self.publish(tick);
        tick
    }
}
