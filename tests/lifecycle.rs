mod common;

use vivarium_lib::model::config::CreatureConfig;
use vivarium_lib::model::lifecycle::create_creature_with_rng;
use vivarium_lib::model::state::{DeathCause, State, Vec2};
use vivarium_lib::model::CreatureLogic;
use vivarium_core::rng::create_rng;

#[test]
fn test_doomed_creatures_die_on_update() {
    let config = CreatureConfig::default();
    let mut rng = create_rng(8);
    for i in 0..200 {
        let mut c = create_creature_with_rng(Vec2::new(10.0, 10.0), 2.0 + (i % 9) as f64, 0.0, &mut rng);
        if i % 2 == 0 {
            c.energy = -(i as f64);
        } else {
            c.age = c.consts.life_expectancy + 0.01;
        }
        c.update(&config);
        assert!(!c.alive);
        let expected = if i % 2 == 0 { DeathCause::Hunger } else { DeathCause::Age };
        assert_eq!(c.death_cause, Some(expected));
    }
}

#[test]
fn test_state_never_regresses() {
    let config = CreatureConfig::default();
    let mut c = common::plant(50.0, 50.0, 3.0);
    c.state = State::Child;
    c.consts.energy_breed = 3.05;
    c.consts.breed_interval = 1.0;

    let mut seen = vec![c.state];
    for _ in 0..400 {
        c.update(&config);
        if seen.last() != Some(&c.state) {
            seen.push(c.state);
        }
        if c.state == State::Breeding {
            break;
        }
    }
    assert_eq!(seen, vec![State::Child, State::Adult, State::Breeding]);
}

#[test]
fn test_plant_accumulates_energy_as_adult() {
    let config = CreatureConfig::default();
    let mut c = common::plant(5.0, 5.0, 2.0);
    let before = c.energy;
    for _ in 0..10 {
        c.update(&config);
    }
    assert!(c.energy > before);
    assert_eq!(c.pos, Vec2::new(5.0, 5.0));
}
