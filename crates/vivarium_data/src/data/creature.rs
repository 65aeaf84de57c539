use super::brain::Brain;
use super::geometry::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state. Only advances `Child -> Adult -> Breeding -> Adult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum State {
    #[default]
    Child,
    Adult,
    Breeding,
}

/// Why a creature died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    Age,
    Hunger,
    Eaten,
}

/// Animals carry a brain and move; plants do neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Animal,
    Plant,
}

/// What an eye keeps track of among the creatures it sees in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EyeDetection {
    #[default]
    Biggest,
    Smallest,
}

/// Directional sensor with a range and a field-of-view cone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eye {
    pub dir: Vec2,
    pub range: f64,
    /// Full field-of-view angle in radians. Targets within `fov / 2` of `dir`
    /// are visible.
    pub fov: f64,
    pub detects: EyeDetection,

    /// Sightings since the last brain evaluation.
    pub count: u32,
    /// Extreme radius seen since the last brain evaluation.
    pub detected: f64,
}

/// Per-individual constants, jittered once at birth.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Constants {
    pub generation: u32,
    /// Signed energy change per unit of simulated time. Negative for animals.
    pub energy_consumption: f64,
    pub energy_breed: f64,
    pub life_expectancy: f64,
    /// Minimum age gap between two breedings.
    pub breed_interval: f64,
}

/// A single agent. Moving creatures with a brain are animals, stationary
/// creatures without one are plants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: Uuid,
    pub pos: Vec2,
    /// Unit heading.
    pub dir: Vec2,
    pub radius: f64,
    pub speed: f64,

    pub eyes: Vec<Eye>,
    pub brain: Option<Brain>,

    pub alive: bool,
    pub energy: f64,
    pub last_bred: f64,
    pub age: f64,
    pub state: State,

    pub interactions: u32,
    pub death_cause: Option<DeathCause>,
    /// Clock reading (seconds) of the last successful meal.
    pub last_eaten: f64,

    pub consts: Constants,
}

impl Default for Creature {
    /// A live, stationary plant of radius 1 at the origin.
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            pos: Vec2::ZERO,
            dir: Vec2::new(1.0, 0.0),
            radius: 1.0,
            speed: 0.0,
            eyes: Vec::new(),
            brain: None,
            alive: true,
            energy: 1.0,
            last_bred: 0.0,
            age: 0.0,
            state: State::Child,
            interactions: 0,
            death_cause: None,
            last_eaten: f64::NEG_INFINITY,
            consts: Constants::default(),
        }
    }
}

impl Creature {
    #[inline]
    pub fn kind(&self) -> Kind {
        if self.brain.is_some() {
            Kind::Animal
        } else {
            Kind::Plant
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.speed > 0.0
    }
}
