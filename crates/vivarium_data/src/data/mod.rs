//! Core data structures for the Vivarium simulation.

pub mod brain;
pub mod creature;
pub mod geometry;
pub mod stats;
