//! Owns the creature collection between ticks: initial placement, the
//! per-tick update, breeding and removal of the dead.

use crate::config::{AppConfig, CreatureConfig, StartMode};
use crate::creature::CreatureLogic;
use crate::error::{Result, SimError};
use crate::geometry::circle_circle;
use crate::lifecycle::{create_creature_with_rng, create_plant_with_rng, random_radius};
use crate::world::World;
use rand::Rng;
use vivarium_data::{Creature, DeathCause, DeathStats, Kind, State, Vec2};

/// Radius of the lone plant in [`StartMode::Fixed`].
pub const FIXED_START_RADIUS: f64 = 3.0;
/// Scale of the litter-size bound `LITTER_SCALE / radius^4`.
const LITTER_SCALE: f64 = 100.0;

/// Death statistics per kind since the last stats sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeathTally {
    pub animal: DeathStats,
    pub plant: DeathStats,
}

impl DeathTally {
    pub fn record(&mut self, c: &Creature) {
        let stats = match c.kind() {
            Kind::Animal => &mut self.animal,
            Kind::Plant => &mut self.plant,
        };
        stats.lifetime = add_to_average(stats.lifetime, c.age as u32);
        stats.interactions = add_to_average(stats.interactions, c.interactions);
        stats.generation = add_to_average(stats.generation, c.consts.generation);
        match c.death_cause {
            Some(DeathCause::Age) => stats.death_by_age += 1,
            Some(DeathCause::Hunger) => stats.death_by_hunger += 1,
            Some(DeathCause::Eaten) => stats.death_by_eaten += 1,
            None => {}
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Cheap decaying average: the first value seeds it, later values halve in.
fn add_to_average(avg: u32, x: u32) -> u32 {
    if avg == 0 {
        x
    } else {
        // u64 keeps the sum from overflowing
        ((u64::from(avg) + u64::from(x)) / 2) as u32
    }
}

/// Outcome of one population update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopulationDelta {
    pub births: usize,
    pub deaths: usize,
}

#[derive(Debug, Clone)]
pub struct PopulationManager {
    config: CreatureConfig,
    placement_attempts: usize,
    tally: DeathTally,
}

impl PopulationManager {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.creature.clone(),
            placement_attempts: config.world.placement_attempts,
            tally: DeathTally::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &CreatureConfig {
        &self.config
    }

    /// Builds the initial population for `mode`.
    pub fn spawn<R: Rng>(
        &self,
        mode: StartMode,
        count: usize,
        world: &World,
        now: f64,
        rng: &mut R,
    ) -> Result<Vec<Creature>> {
        match mode {
            StartMode::Random => self.init_population(count, world, now, rng),
            StartMode::Fixed => {
                let centre = Vec2::new(world.width / 2.0, world.height / 2.0);
                Ok(vec![create_plant_with_rng(centre, FIXED_START_RADIUS, now, rng)])
            }
        }
    }

    /// Places `count` creatures at free positions by rejection sampling.
    pub fn init_population<R: Rng>(
        &self,
        count: usize,
        world: &World,
        now: f64,
        rng: &mut R,
    ) -> Result<Vec<Creature>> {
        let mut creatures: Vec<Creature> = Vec::with_capacity(count);
        for _ in 0..count {
            let radius = random_radius(&self.config, rng);
            let pos = self.free_position(&creatures, world, radius, rng)?;
            creatures.push(create_creature_with_rng(pos, radius, now, rng));
        }
        tracing::debug!(count = creatures.len(), "Initial population placed");
        Ok(creatures)
    }

    fn free_position<R: Rng>(
        &self,
        placed: &[Creature],
        world: &World,
        radius: f64,
        rng: &mut R,
    ) -> Result<Vec2> {
        let span_x = world.width - 2.0 * radius;
        let span_y = world.height - 2.0 * radius;
        if span_x > 0.0 && span_y > 0.0 {
            for _ in 0..self.placement_attempts {
                let pos = Vec2::new(
                    rng.gen::<f64>() * span_x + radius,
                    rng.gen::<f64>() * span_y + radius,
                );
                if !placed
                    .iter()
                    .any(|c| circle_circle(c.pos, c.radius, pos, radius))
                {
                    return Ok(pos);
                }
            }
        }
        tracing::warn!(radius, attempts = self.placement_attempts, "No free position left");
        Err(SimError::Placement {
            radius,
            attempts: self.placement_attempts,
        })
    }

    /// Updates every creature, breeds those ready to, then drops the dead and
    /// appends the newborn. Dead creatures are tallied, never bred.
    pub fn update_population<R: Rng>(
        &mut self,
        creatures: &mut Vec<Creature>,
        now: f64,
        rng: &mut R,
    ) -> PopulationDelta {
        let mut newborn = Vec::new();
        let mut deaths = 0;

        for c in creatures.iter_mut() {
            c.update(&self.config);

            if !c.is_alive() {
                self.tally.record(c);
                deaths += 1;
                continue;
            }
            if c.state == State::Breeding {
                self.breed(c, now, rng, &mut newborn);
            }
        }

        creatures.retain(Creature::is_alive);
        let births = newborn.len();
        creatures.extend(newborn);
        PopulationDelta { births, deaths }
    }

    /// Spawns a litter. Children only get energy the parent can spare.
    fn breed<R: Rng>(&self, parent: &mut Creature, now: f64, rng: &mut R, out: &mut Vec<Creature>) {
        parent.state = State::Adult;
        parent.last_bred = parent.age;
        parent.energy -= parent.radius;

        let bound = (LITTER_SCALE / parent.radius.powi(4)) as usize;
        let litter = rng.gen_range(0..=bound.min(self.config.max_litter - 1)) + 1;
        for _ in 0..litter {
            let child = parent.new_child(&self.config, now, rng);
            if parent.energy - child.energy > 0.0 {
                parent.energy -= child.energy;
                out.push(child);
            }
        }
    }

    #[inline]
    pub fn tally(&self) -> &DeathTally {
        &self.tally
    }

    #[inline]
    pub fn tally_mut(&mut self) -> &mut DeathTally {
        &mut self.tally
    }
}

/// Index of the animal with the highest generation. Ties keep the first.
pub fn find_oldest(creatures: &[Creature]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (i, c) in creatures.iter().enumerate() {
        if !c.is_moving() {
            continue;
        }
        if best.map_or(true, |(_, g)| c.consts.generation > g) {
            best = Some((i, c.consts.generation));
        }
    }
    best.map(|(i, _)| i)
}
