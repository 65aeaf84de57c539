mod common;

use vivarium_lib::model::collision::{resolve_all, Collision, GridDetector};
use vivarium_lib::model::world::World;
use vivarium_lib::model::CreatureLogic;
use vivarium_core::CollisionDetector;

#[test]
fn test_animal_eats_overlapping_plant() {
    let mut hunter = common::animal(10.0, 10.0, 3.0);
    let mut prey = common::plant(12.0, 10.0, 2.0);
    let energy = hunter.energy;
    assert!(hunter.collide(&mut prey, 5.0, 1.0));
    assert!(!prey.alive);
    assert!(hunter.energy > energy);
}

#[test]
fn test_same_species_blocks_predation() {
    let mut big = common::animal(10.0, 10.0, 4.0);
    let mut small = common::animal(12.0, 10.0, 3.0);
    assert!(!big.collide(&mut small, 5.0, 1.0));
    assert!(small.alive);
}

#[test]
fn test_detect_then_resolve_on_grid() {
    let mut world = World::new(300.0, 300.0, 3).expect("world");
    let mut creatures = vec![
        common::animal(100.0, 100.0, 6.0),
        common::plant(104.0, 100.0, 2.0),
        common::plant(250.0, 250.0, 2.0),
    ];
    world.update_cells(&creatures);
    let events = GridDetector.detect(&world, &creatures);
    assert!(events.contains(&Collision::Creature { hunter: 0, other: 1 }));

    let meals = resolve_all(&events, &mut creatures, &world, 10.0, 1.0);
    assert_eq!(meals, 1);
    assert!(!creatures[1].alive);
    assert!(creatures[2].alive);
    assert_eq!(creatures[0].energy, 6.0 + 16.0);
}

#[test]
fn test_border_wraps_through_simulation_pipeline() {
    let mut world = World::new(100.0, 100.0, 2).expect("world");
    let mut creatures = vec![common::animal(-0.5, 50.0, 1.0)];
    world.update_cells(&creatures);
    let events = GridDetector.detect(&world, &creatures);
    resolve_all(&events, &mut creatures, &world, 0.0, 1.0);
    assert_eq!(creatures[0].pos.x, 99.5);
}
