//! End-to-end runs through the public driver API.

use reagent_core::{GrayScottParams, StepId};
use reagent_engine::{SimConfig, Simulation};
use reagent_space::SeedPattern;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn flower_run_keeps_mass_bounded() {
    init_logging();
    let params = GrayScottParams::preset("flower").unwrap();
    let config = SimConfig::new(50, 50)
        .with_params(params)
        .with_seed(SeedPattern::Centered { cluster_size: 2 });
    let mut sim = Simulation::new(config).unwrap();
    let cells = 50.0 * 50.0;
    let initial_mass = sim.grid().total_mass();
    assert_eq!(initial_mass, cells);

    for _ in 0..100 {
        sim.advance_frame().unwrap();
        let mass = sim.last_metrics().total_mass;
        assert!(mass.is_finite(), "mass diverged at step {}", sim.current_step());
        assert!(
            (0.0..=2.0 * cells).contains(&mass),
            "mass {mass} out of range at step {}",
            sim.current_step()
        );
    }
    assert_eq!(sim.current_step(), StepId(1000));
    assert!(sim.check_finite().is_ok());
}

#[test]
fn background_only_grid_stays_put() {
    init_logging();
    let config = SimConfig::new(20, 10).with_seed(SeedPattern::Centered { cluster_size: 0 });
    let mut sim = Simulation::new(config).unwrap();
    let before = sim.grid().clone();
    sim.advance(40).unwrap();
    assert_eq!(sim.grid(), &before);
}

#[test]
fn every_preset_runs() {
    init_logging();
    for (name, params) in GrayScottParams::presets() {
        let config = SimConfig::new(24, 24).with_params(params);
        let mut sim = Simulation::new(config).unwrap();
        sim.advance(50).unwrap();
        assert!(sim.check_finite().is_ok(), "preset {name} diverged");
    }
}

#[test]
fn single_cell_simulation() {
    init_logging();
    let config = SimConfig::new(1, 1).with_seed(SeedPattern::Centered { cluster_size: 0 });
    let mut sim = Simulation::new(config).unwrap();
    let frame = sim.advance(10).unwrap();
    assert_eq!(frame.pixels().len(), 1);
    assert_eq!(sim.grid().get_point(0, 0), (1.0, 0.0));
}
