use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Death tallies for one kind of creature since the last stats sample.
///
/// `lifetime`, `interactions` and `generation` are running averages, the
/// `death_by_*` fields are plain counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeathStats {
    pub lifetime: u32,
    pub interactions: u32,
    pub generation: u32,
    pub death_by_age: u32,
    pub death_by_hunger: u32,
    pub death_by_eaten: u32,
}

impl DeathStats {
    pub fn total(&self) -> u32 {
        self.death_by_age + self.death_by_hunger + self.death_by_eaten
    }
}

/// Population figures for one kind of creature at a sample point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityTimeStat {
    pub population: usize,
    pub highest_generation: u32,
    pub lowest_generation: u32,
    pub deaths: DeathStats,
}

/// One sample of the time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeStat {
    pub tick: u64,
    pub population: usize,
    pub animal: EntityTimeStat,
    pub plant: EntityTimeStat,
}

/// Runtime statistics of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub seed: u64,
    pub started_at: DateTime<Utc>,
    /// Wall time since the collector started, in seconds.
    pub running_secs: f64,
    pub ticks: u64,
    pub current: TimeStat,
    pub over_time: VecDeque<TimeStat>,
}

impl Stats {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            started_at: Utc::now(),
            running_secs: 0.0,
            ticks: 0,
            current: TimeStat::default(),
            over_time: VecDeque::new(),
        }
    }
}
