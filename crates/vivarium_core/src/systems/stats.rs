use crate::config::StatsConfig;
use crate::population::DeathTally;
use std::time::Instant;
use vivarium_data::{Creature, EntityTimeStat, Kind, Stats, TimeStat};

/// Samples population statistics every `interval` ticks.
#[derive(Debug, Clone)]
pub struct IntervalCollector {
    stats: Stats,
    interval: u64,
    history_limit: usize,
    started: Instant,
    last_sampled: Option<u64>,
}

impl IntervalCollector {
    pub fn new(seed: u64, config: &StatsConfig) -> Self {
        Self {
            stats: Stats::new(seed),
            interval: config.interval.max(1),
            history_limit: config.history_limit.max(1),
            started: Instant::now(),
            last_sampled: None,
        }
    }

    /// Takes a sample on interval ticks not sampled yet, then clears `tally`.
    /// Returns whether a sample was taken.
    pub fn update(&mut self, tick: u64, creatures: &[Creature], tally: &mut DeathTally) -> bool {
        if tick % self.interval != 0 || self.last_sampled == Some(tick) {
            return false;
        }
        self.last_sampled = Some(tick);

        let sample = sample(tick, creatures, tally);
        tally.clear();

        self.stats.running_secs = self.started.elapsed().as_secs_f64();
        self.stats.ticks = tick;
        self.stats.current = sample;
        self.stats.over_time.push_back(sample);
        while self.stats.over_time.len() > self.history_limit {
            self.stats.over_time.pop_front();
        }

        tracing::debug!(
            tick,
            population = sample.population,
            animals = sample.animal.population,
            plants = sample.plant.population,
            "Stats sampled"
        );
        true
    }

    /// Drops all samples and starts a fresh run under `seed`.
    pub fn reset(&mut self, seed: u64) {
        self.stats = Stats::new(seed);
        self.started = Instant::now();
        self.last_sampled = None;
    }

    #[inline]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn snapshot(&self) -> Stats {
        self.stats.clone()
    }
}

pub fn sample(tick: u64, creatures: &[Creature], tally: &DeathTally) -> TimeStat {
    let mut animal = EntityTimeStat {
        deaths: tally.animal,
        ..Default::default()
    };
    let mut plant = EntityTimeStat {
        deaths: tally.plant,
        ..Default::default()
    };

    for c in creatures {
        let stat = match c.kind() {
            Kind::Animal => &mut animal,
            Kind::Plant => &mut plant,
        };
        let generation = c.consts.generation;
        if stat.population == 0 {
            stat.highest_generation = generation;
            stat.lowest_generation = generation;
        } else {
            stat.highest_generation = stat.highest_generation.max(generation);
            stat.lowest_generation = stat.lowest_generation.min(generation);
        }
        stat.population += 1;
    }

    TimeStat {
        tick,
        population: creatures.len(),
        animal,
        plant,
    }
}
