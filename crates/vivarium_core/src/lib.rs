//! # Vivarium Core
//!
//! The deterministic simulation engine behind Vivarium, a small artificial-life
//! world of plants and brain-driven animals.
//!
//! This crate contains:
//! - A spatial grid rebuilt every tick for sub-quadratic collision queries
//! - Collision detection (border, creature, eye) and per-variant resolution
//! - The creature agent model: aging, energy, brain decisions, mutation
//! - The population manager: placement, update, breeding and compaction
//! - Interval statistics and tick metrics
//!
//! ## Architecture
//!
//! Data types live in `vivarium_data`; behaviour is attached to them through
//! extension traits such as [`BrainLogic`] and [`CreatureLogic`]. All
//! randomness flows through an explicit RNG so seeded runs are reproducible.
//!
//! ## Example
//!
//! ```
//! use vivarium_core::brain::BrainLogic;
//! use vivarium_data::Brain;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let brain = Brain::new_random_with_rng(2, &mut rng);
//! let outputs = brain.forward(&[0.5, -0.9]);
//! assert_eq!(outputs.len(), 4);
//! ```

/// Feed-forward brain evaluation and mutation
pub mod brain;
/// Simulation time sources for wall-clock cooldowns
pub mod clock;
/// Collision events, detection and resolution
pub mod collision;
/// Configuration management for simulation parameters
pub mod config;
/// Per-creature update, brain decision and predation
pub mod creature;
/// Error type for fallible setup operations
pub mod error;
/// Circle and angle tests
pub mod geometry;
/// Creature construction and reproduction
pub mod lifecycle;
/// Tick metrics and structured logging
pub mod metrics;
/// Population placement, update and compaction
pub mod population;
/// Seeded randomness helpers
pub mod rng;
/// Interval statistics collection
pub mod systems;
/// World bounds and the spatial grid
pub mod world;

pub use brain::BrainLogic;
pub use clock::{Clock, TickClock, WallClock};
pub use collision::{Collision, CollisionDetector, Side};
pub use config::AppConfig;
pub use creature::{CreatureLogic, EyeLogic};
pub use error::{Result, SimError};
pub use metrics::{init_logging, TickMetrics};
pub use population::{DeathTally, PopulationManager};
pub use world::{Cell, World};
