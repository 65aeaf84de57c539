//! # Vivarium Data
//!
//! Plain data types shared by the simulation core and its collaborators.
//! Behaviour lives in `vivarium_core`, attached through extension traits.

pub mod data;

pub use data::brain::{Brain, Layer};
pub use data::creature::{Constants, Creature, DeathCause, Eye, EyeDetection, Kind, State};
pub use data::geometry::Vec2;
pub use data::stats::{DeathStats, EntityTimeStat, Stats, TimeStat};
