use crate::brain::{BrainLogic, INPUTS_PER_EYE};
use crate::config::CreatureConfig;
use crate::rng::{maybe_mutate, normal, random_dir};
use rand::Rng;
use uuid::Uuid;
use vivarium_data::{Brain, Constants, Creature, Eye, EyeDetection, State, Vec2};

/// Spread of the initial radius distribution above `min_radius`.
pub const INITIAL_RADIUS_SPREAD: f64 = 10.0;
/// Plants larger than this may spontaneously become animals.
const ANIMAL_MIN_RADIUS: f64 = 2.0;
const ANIMAL_CHANCE: f64 = 0.01;
const BASE_EYE_RANGE: f64 = 80.0;
/// Initial breeding clock, so first breeding only waits on energy.
const INITIAL_LAST_BRED: f64 = -30.0;

/// Radius for a fresh creature, cubically skewed toward small individuals.
pub fn random_radius<R: Rng>(config: &CreatureConfig, rng: &mut R) -> f64 {
    let u = rng.gen::<f64>() * rng.gen::<f64>() * rng.gen::<f64>();
    u * INITIAL_RADIUS_SPREAD + config.min_radius
}

/// Eye whose field of view narrows as its range grows.
pub fn new_eye(range: f64, detects: EyeDetection, dir: Vec2) -> Eye {
    let mut eye = Eye {
        dir,
        range,
        fov: (80.0 / range * 40.0).to_radians(),
        detects,
        count: 0,
        detected: 0.0,
    };
    crate::creature::EyeLogic::reset(&mut eye);
    eye
}

pub fn new_random_eye<R: Rng>(dir: Vec2, rng: &mut R) -> Eye {
    let detects = if rng.gen::<f64>() > 0.5 {
        EyeDetection::Smallest
    } else {
        EyeDetection::Biggest
    };
    new_eye(maybe_mutate(BASE_EYE_RANGE, 1.0, 1.0, rng), detects, dir)
}

/// Creates a first-generation creature. Mostly plants; larger ones
/// occasionally start out as animals.
pub fn create_creature_with_rng<R: Rng>(pos: Vec2, radius: f64, now: f64, rng: &mut R) -> Creature {
    build(pos, radius, None, 0, &[], true, now, rng)
}

/// Creates a first-generation plant.
pub fn create_plant_with_rng<R: Rng>(pos: Vec2, radius: f64, now: f64, rng: &mut R) -> Creature {
    build(pos, radius, None, 0, &[], false, now, rng)
}

/// Offspring of `parent`: mutated radius, inherited (and mutated) eyes and
/// brain, one generation deeper.
pub fn new_child_with_rng<R: Rng>(
    parent: &Creature,
    config: &CreatureConfig,
    now: f64,
    rng: &mut R,
) -> Creature {
    let r = maybe_mutate(parent.radius, 0.1, 0.5, rng);
    let r = maybe_mutate(r, 1.5, 0.3, rng);
    let radius = r.clamp(config.min_radius, config.max_radius);

    build(
        parent.pos,
        radius,
        parent.brain.as_ref(),
        parent.consts.generation + 1,
        &parent.eyes,
        true,
        now,
        rng,
    )
}

#[allow(clippy::too_many_arguments)]
fn build<R: Rng>(
    pos: Vec2,
    radius: f64,
    parent_brain: Option<&Brain>,
    mut generation: u32,
    parent_eyes: &[Eye],
    may_become_animal: bool,
    now: f64,
    rng: &mut R,
) -> Creature {
    let id = Uuid::from_u128(rng.gen::<u128>());
    let dir = random_dir(rng);
    let mut energy_consumption = (normal(rng) * 0.1 + 1.0) / 300.0 * (radius / 4.0);

    let is_animal = parent_brain.is_some()
        || (may_become_animal
            && radius > ANIMAL_MIN_RADIUS
            && rng.gen::<f64>() > 1.0 - ANIMAL_CHANCE);

    let (speed, eyes, brain) = if is_animal {
        if parent_brain.is_none() {
            generation = 0;
        }
        let speed = maybe_mutate(2.0 / radius, 0.2, 1.0, rng);
        let eyes = inherit_eyes(parent_eyes, dir, rng);
        let inputs = eyes.len() * INPUTS_PER_EYE;
        let brain = match parent_brain {
            Some(b) => b.mutated_with_rng(inputs, rng),
            None => Brain::new_random_with_rng(inputs, rng),
        };
        energy_consumption = -energy_consumption;
        (speed, eyes, Some(brain))
    } else {
        (0.0, Vec::new(), None)
    };

    let life_expectancy = maybe_mutate(radius.powi(4), 0.2, 1.0, rng);
    let energy_breed = maybe_mutate(0.5 * radius + 0.5 * radius * radius, 0.05, 0.5, rng);
    let breed_interval = normal(rng) * 0.2 + life_expectancy / 3.0;

    Creature {
        id,
        pos,
        dir,
        radius,
        speed,
        eyes,
        brain,
        alive: true,
        energy: radius,
        last_bred: INITIAL_LAST_BRED,
        age: 0.0,
        state: State::Child,
        interactions: 0,
        death_cause: None,
        last_eaten: now,
        consts: Constants {
            generation,
            energy_consumption,
            energy_breed,
            life_expectancy,
            breed_interval,
        },
    }
}

fn inherit_eyes<R: Rng>(parent_eyes: &[Eye], dir: Vec2, rng: &mut R) -> Vec<Eye> {
    if parent_eyes.is_empty() {
        return vec![new_random_eye(dir, rng)];
    }

    let mut eyes: Vec<Eye> = parent_eyes
        .iter()
        .map(|e| new_eye(maybe_mutate(e.range, 0.5, 0.1, rng), e.detects, dir))
        .collect();

    let r = rng.gen::<f64>();
    if r > 0.9 {
        eyes.push(new_random_eye(dir, rng));
    } else if r < 0.1 && eyes.len() > 1 {
        eyes.pop();
    }
    eyes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use vivarium_data::Kind;

    fn first_animal(seed: u64) -> Creature {
        let mut rng = create_rng(seed);
        loop {
            let c = create_creature_with_rng(Vec2::new(5.0, 5.0), 6.0, 0.0, &mut rng);
            if c.kind() == Kind::Animal {
                return c;
            }
        }
    }

    #[test]
    fn test_small_creatures_are_plants() {
        let mut rng = create_rng(1);
        for _ in 0..200 {
            let c = create_creature_with_rng(Vec2::ZERO, 2.0, 0.0, &mut rng);
            assert_eq!(c.kind(), Kind::Plant);
            assert_eq!(c.speed, 0.0);
            assert!(c.eyes.is_empty());
            assert!(c.consts.energy_consumption > 0.0);
            assert_eq!(c.energy, 2.0);
            assert_eq!(c.state, State::Child);
        }
    }

    #[test]
    fn test_create_plant_never_spawns_animals() {
        let mut rng = create_rng(9);
        for _ in 0..500 {
            let c = create_plant_with_rng(Vec2::ZERO, 8.0, 0.0, &mut rng);
            assert_eq!(c.kind(), Kind::Plant);
        }
    }

    #[test]
    fn test_animals_have_eyes_brain_and_drain() {
        let a = first_animal(2);
        assert!(a.speed > 0.0);
        assert_eq!(a.eyes.len(), 1);
        let brain = a.brain.as_ref().expect("animal brain");
        assert_eq!(brain.inputs, a.eyes.len() * INPUTS_PER_EYE);
        assert!(a.consts.energy_consumption < 0.0);
        assert_eq!(a.consts.generation, 0);
    }

    #[test]
    fn test_child_radius_is_clamped_and_generation_increments() {
        let config = CreatureConfig::default();
        let mut rng = create_rng(3);
        let parent = Creature {
            radius: 10.0,
            ..Default::default()
        };
        for _ in 0..200 {
            let child = new_child_with_rng(&parent, &config, 0.0, &mut rng);
            assert!(child.radius >= config.min_radius && child.radius <= config.max_radius);
            assert_eq!(child.consts.generation, 1);
            assert_eq!(child.pos, parent.pos);
        }
    }

    #[test]
    fn test_animal_child_inherits_brain_width() {
        let config = CreatureConfig::default();
        let parent = first_animal(4);
        let mut rng = create_rng(5);
        for _ in 0..100 {
            let child = new_child_with_rng(&parent, &config, 0.0, &mut rng);
            assert_eq!(child.kind(), Kind::Animal);
            assert!(!child.eyes.is_empty() && child.eyes.len() <= parent.eyes.len() + 1);
            let brain = child.brain.as_ref().expect("brain");
            assert_eq!(brain.inputs, child.eyes.len() * INPUTS_PER_EYE);
        }
    }

    #[test]
    fn test_eye_fov_narrows_with_range() {
        let near = new_eye(40.0, EyeDetection::Biggest, Vec2::ZERO);
        let far = new_eye(160.0, EyeDetection::Biggest, Vec2::ZERO);
        assert!(near.fov > far.fov);
        assert!((new_eye(80.0, EyeDetection::Biggest, Vec2::ZERO).fov - 40f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn test_random_radius_range() {
        let config = CreatureConfig::default();
        let mut rng = create_rng(6);
        let radii: Vec<f64> = (0..1000).map(|_| random_radius(&config, &mut rng)).collect();
        assert!(radii.iter().all(|&r| (2.0..12.0).contains(&r)));
        let small = radii.iter().filter(|&&r| r < 4.0).count();
        assert!(small > 500, "power law should favour small radii, got {small}");
    }
}
