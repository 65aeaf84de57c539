//! Per-creature behaviour: aging, energy, brain-driven steering and predation.

use crate::brain::{BrainLogic, INPUTS_PER_EYE};
use crate::config::CreatureConfig;
use crate::lifecycle;
use rand::Rng;
use vivarium_data::{Creature, DeathCause, Eye, EyeDetection, State};

/// Ratio bounds (exclusive) inside which two creatures count as one species.
pub const SPECIES_RATIO: (f64, f64) = (0.5, 1.5);
/// Baseline of the `Smallest` accumulator before anything is seen.
pub const SMALLEST_SENTINEL: f64 = 9_999_999.0;

const INPUT_LOW: f64 = -0.9;
const INPUT_HIGH: f64 = 0.9;

/// Rotation steps (radians) selected by the turn-amount output.
const TURN_BUCKETS: [(f64, f64); 3] = [(-0.5, 0.01), (0.0, 0.05), (0.5, 0.1)];
const TURN_MAX: f64 = 0.14;

pub trait EyeLogic {
    /// Records one sighting of a creature with the given radius.
    fn sees(&mut self, radius: f64);
    /// Clears the accumulators to their mode baseline.
    fn reset(&mut self);
}

impl EyeLogic for Eye {
    fn sees(&mut self, radius: f64) {
        self.count += 1;
        self.detected = match self.detects {
            EyeDetection::Biggest => self.detected.max(radius),
            EyeDetection::Smallest => self.detected.min(radius),
        };
    }

    fn reset(&mut self) {
        self.count = 0;
        self.detected = match self.detects {
            EyeDetection::Biggest => 0.0,
            EyeDetection::Smallest => SMALLEST_SENTINEL,
        };
    }
}

pub trait CreatureLogic {
    /// Advances one tick: death checks, then state-specific behaviour, then aging.
    fn update(&mut self, config: &CreatureConfig);

    /// Feeds the eyes through the brain and steers. No-op for plants.
    fn update_from_brain(&mut self);

    /// Tries to eat `other`. Returns true on a successful meal.
    fn collide(&mut self, other: &mut Creature, now: f64, cooldown: f64) -> bool;

    fn is_same_species(&self, other: &Creature) -> bool;

    fn die(&mut self, cause: DeathCause);

    fn new_child<R: Rng>(&self, config: &CreatureConfig, now: f64, rng: &mut R) -> Creature;
}

impl CreatureLogic for Creature {
    fn update(&mut self, config: &CreatureConfig) {
        if !self.alive {
            return;
        }
        if self.energy <= 0.0 {
            self.die(DeathCause::Hunger);
            return;
        }
        if self.age > self.consts.life_expectancy {
            self.die(DeathCause::Age);
            return;
        }

        let ws = config.world_speed;
        match self.state {
            State::Child => {
                self.pos = self.pos + self.dir.scaled(ws);
                if self.age > config.child_age {
                    self.state = State::Adult;
                }
            }
            State::Adult => {
                if self.energy > self.consts.energy_breed
                    && self.age - self.last_bred > self.consts.breed_interval
                {
                    self.state = State::Breeding;
                }
                if self.is_moving() {
                    self.update_from_brain();
                    self.pos = self.pos + self.dir.scaled(self.speed * ws);
                }
                self.energy += self.consts.energy_consumption * ws;
            }
            State::Breeding => {}
        }

        self.age += config.age_step * ws;
    }

    fn update_from_brain(&mut self) {
        let Some(brain) = self.brain.as_ref() else {
            return;
        };

        let mut inputs = Vec::with_capacity(self.eyes.len() * INPUTS_PER_EYE);
        for eye in &self.eyes {
            inputs.push((INPUT_LOW + f64::from(eye.count) / 10.0).min(INPUT_HIGH));
            inputs.push(if eye.count > 0 && eye.detected > self.radius {
                INPUT_HIGH
            } else {
                INPUT_LOW
            });
        }
        let out = brain.forward(&inputs);

        let mut dir = self.dir;
        if out[0] < 0.0 {
            let step = TURN_BUCKETS
                .iter()
                .find(|(limit, _)| out[1] < *limit)
                .map_or(TURN_MAX, |&(_, step)| step);
            dir = dir.rotated(if out[2] < 0.0 { -step } else { step });
        }
        if out[3] > 0.0 {
            dir = dir.reversed();
        }
        self.dir = dir;

        for eye in &mut self.eyes {
            eye.reset();
            eye.dir = dir;
        }
    }

    fn collide(&mut self, other: &mut Creature, now: f64, cooldown: f64) -> bool {
        if now - self.last_eaten < cooldown || self.brain.is_none() {
            return false;
        }
        let can_eat = other.brain.is_none()
            || (self.radius > other.radius && !self.is_same_species(other));
        if !can_eat {
            return false;
        }

        self.interactions += 1;
        other.interactions += 1;
        self.energy += other.radius.powi(4);
        other.die(DeathCause::Eaten);
        self.last_eaten = now;
        true
    }

    fn is_same_species(&self, other: &Creature) -> bool {
        let ratio = self.radius / other.radius;
        ratio > SPECIES_RATIO.0 && ratio < SPECIES_RATIO.1
    }

    fn die(&mut self, cause: DeathCause) {
        self.alive = false;
        self.death_cause = Some(cause);
    }

    fn new_child<R: Rng>(&self, config: &CreatureConfig, now: f64, rng: &mut R) -> Creature {
        lifecycle::new_child_with_rng(self, config, now, rng)
    }
}
