//! # Vivarium
//!
//! A tick-driven artificial-life simulation: plants grow, animals steer with
//! tiny evolved brains, eat, breed and die on a toroidal world.
//!
//! The engine lives in `vivarium_core`. This crate adds the scheduler, the
//! subscription hub, the orchestrator that wires one tick together, and the
//! thread-safe [`app::SimulationHandle`] collaborators control it through.

pub mod app;
pub mod model;

pub use app::SimulationHandle;
pub use model::simulation::Simulation;
