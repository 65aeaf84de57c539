//! Collision events between creatures, the world border and eyes.
//!
//! Detection reads a consistent snapshot and never mutates it; every effect
//! is applied afterwards by [`resolve::resolve_all`]. Events carry indices
//! into the creature slice they were detected on.

pub mod detector;
pub mod resolve;

pub use detector::{BruteForceDetector, GridDetector};
pub use resolve::resolve_all;

use crate::world::World;
use vivarium_data::Creature;

/// World edge a creature crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Border {
        creature: usize,
        side: Side,
    },
    /// `hunter` overlaps `other`. The mirrored pair is reported separately.
    Creature {
        hunter: usize,
        other: usize,
    },
    /// Eye `eye` of `creature` sees `target`.
    Eye {
        creature: usize,
        eye: usize,
        target: usize,
    },
}

/// Produces the collision events for one tick.
pub trait CollisionDetector {
    /// `world` must have been rebuilt from `creatures` for grid-backed detectors.
    fn detect(&self, world: &World, creatures: &[Creature]) -> Vec<Collision>;
}
