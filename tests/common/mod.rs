use vivarium_lib::model::config::AppConfig;
use vivarium_lib::model::state::{Brain, Constants, Creature, State, Vec2};
use vivarium_lib::model::BrainLogic;

/// Seeded, tick-clocked configuration.
#[allow(dead_code)]
pub fn seeded_config(seed: u64, population: usize) -> AppConfig {
    let mut config = AppConfig::default();
    config.world.seed = Some(seed);
    config.world.deterministic = true;
    config.world.initial_population = population;
    config
}

#[allow(dead_code)]
pub fn plant(x: f64, y: f64, radius: f64) -> Creature {
    Creature {
        pos: Vec2::new(x, y),
        radius,
        energy: radius,
        state: State::Adult,
        consts: Constants {
            life_expectancy: radius.powi(4),
            energy_breed: 1e9,
            energy_consumption: 0.001,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn animal(x: f64, y: f64, radius: f64) -> Creature {
    let mut rng = vivarium_core::rng::create_rng(radius.to_bits());
    Creature {
        speed: 1.0,
        brain: Some(Brain::new_random_with_rng(0, &mut rng)),
        consts: Constants {
            energy_consumption: -0.001,
            ..plant(x, y, radius).consts
        },
        ..plant(x, y, radius)
    }
}
