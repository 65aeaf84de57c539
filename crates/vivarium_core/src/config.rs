//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! a `vivarium.toml` file. Every section has defaults, so a file only needs to
//! name the values it overrides.
//!
//! ## Example `vivarium.toml`
//!
//! ```toml
//! [world]
//! width = 1000.0
//! height = 1000.0
//! initial_population = 1000
//! seed = 2
//! deterministic = true
//!
//! [creature]
//! world_speed = 1.0
//!
//! [ticker]
//! ticks_per_second = 60
//!
//! [stats]
//! interval = 60
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the world edges behave. Only toroidal wrap exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    #[default]
    Loop,
}

/// How the initial population is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartMode {
    /// `initial_population` creatures with power-law radii at free positions.
    #[default]
    Random,
    /// A single plant in the centre of the world.
    Fixed,
}

/// World-level simulation configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub initial_population: usize,
    /// Cells per row and per column of the spatial grid.
    pub grid_size: usize,
    pub seed: Option<u64>,
    /// Derive cooldown time from ticks instead of the wall clock.
    pub deterministic: bool,
    pub start_mode: StartMode,
    pub edge_mode: EdgeMode,
    /// Rejection-sampling budget per creature during initial placement.
    pub placement_attempts: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            initial_population: 1000,
            grid_size: 6,
            seed: None,
            deterministic: false,
            start_mode: StartMode::Random,
            edge_mode: EdgeMode::Loop,
            placement_attempts: 100_000,
        }
    }
}

/// Creature lifecycle parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CreatureConfig {
    /// Multiplier on movement, energy change and aging per tick.
    pub world_speed: f64,
    /// Seconds a predator must wait between two meals.
    pub eat_cooldown_secs: f64,
    /// Age at which a child becomes an adult.
    pub child_age: f64,
    /// Age added per tick, before `world_speed`.
    pub age_step: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Extra radius used when picking a creature at a point.
    pub pick_margin: f64,
    /// Upper bound on children spawned per breeding event.
    pub max_litter: usize,
}

impl Default for CreatureConfig {
    fn default() -> Self {
        Self {
            world_speed: 1.0,
            eat_cooldown_secs: 1.0,
            child_age: 0.5,
            age_step: 0.01,
            min_radius: 2.0,
            max_radius: 10.0,
            pick_margin: 5.0,
            max_litter: 16,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TickerConfig {
    /// Values <= 0 are clamped to 1 by the ticker.
    pub ticks_per_second: i64,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StatsConfig {
    /// Sample every `interval` ticks.
    pub interval: u64,
    /// Oldest samples are dropped beyond this many.
    pub history_limit: usize,
    /// Emit a tick metrics log line every this many ticks.
    pub log_every: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            interval: 60,
            history_limit: 10_000,
            log_every: 1000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub creature: CreatureConfig,
    pub ticker: TickerConfig,
    pub stats: StatsConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file. A missing file yields defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file missing, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure. The tick rate is deliberately absent:
    /// the ticker clamps it instead of rejecting it.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.world.width.is_finite() && self.world.width > 0.0,
            "World width must be positive"
        );
        anyhow::ensure!(
            self.world.height.is_finite() && self.world.height > 0.0,
            "World height must be positive"
        );
        anyhow::ensure!(self.world.grid_size >= 1, "Grid size must be at least 1");
        anyhow::ensure!(
            self.world.placement_attempts >= 1,
            "Placement attempts must be at least 1"
        );

        anyhow::ensure!(
            self.creature.world_speed > 0.0,
            "World speed must be positive"
        );
        anyhow::ensure!(
            self.creature.eat_cooldown_secs >= 0.0,
            "Eat cooldown must be non-negative"
        );
        anyhow::ensure!(
            self.creature.min_radius > 0.0 && self.creature.min_radius <= self.creature.max_radius,
            "Radius range must satisfy 0 < min_radius <= max_radius"
        );
        anyhow::ensure!(
            self.creature.max_litter >= 1,
            "Max litter must be at least 1"
        );

        anyhow::ensure!(self.stats.interval >= 1, "Stats interval must be at least 1");
        anyhow::ensure!(
            self.stats.history_limit >= 1,
            "Stats history limit must be at least 1"
        );

        Ok(())
    }
}
