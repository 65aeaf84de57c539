//! Error types for vivarium_core.
//!
//! The tick itself never fails; only setup operations such as building a
//! world or placing the initial population can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    /// Rejection sampling found no free spot.
    #[error("could not place creature of radius {radius} after {attempts} attempts")]
    Placement { radius: f64, attempts: usize },

    #[error("invalid world: {0}")]
    InvalidWorld(String),
}

pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    #[must_use]
    pub fn invalid_world<S: Into<String>>(msg: S) -> Self {
        Self::InvalidWorld(msg.into())
    }
}
