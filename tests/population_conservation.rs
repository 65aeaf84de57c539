mod common;

use vivarium_core::rng::create_rng;
use vivarium_lib::model::config::AppConfig;
use vivarium_lib::model::population::PopulationManager;
use vivarium_lib::model::state::State;

#[test]
fn test_children_never_take_more_than_parent_spares() {
    let mut manager = PopulationManager::new(&AppConfig::default());
    let mut rng = create_rng(21);

    for radius in [2.0, 2.5, 3.0, 5.0, 8.0] {
        for energy in [radius + 1.0, 20.0, 200.0] {
            let mut parent = common::plant(50.0, 50.0, radius);
            parent.energy = energy;
            parent.state = State::Breeding;
            let mut cs = vec![parent];

            manager.update_population(&mut cs, 0.0, &mut rng);

            let spent: f64 = cs[1..].iter().map(|c| c.energy).sum();
            assert!(spent <= energy - radius + 1e-9, "r={radius} e={energy}: {spent}");
            assert_eq!(cs[0].state, State::Adult);
        }
    }
}

#[test]
fn test_update_population_returns_only_living() {
    let sim_config = common::seeded_config(4, 300);
    let mut sim = vivarium_lib::Simulation::new(sim_config).expect("simulation");
    for _ in 0..50 {
        sim.step();
        assert!(sim.creatures().iter().all(|c| c.alive));
    }
}
