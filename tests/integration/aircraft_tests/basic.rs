use approx::assert_relative_eq;
use bevy::prelude::*;
use aerobat::{
    components::{AircraftState, FlightConfig, FlightModel, FlightPhase, TransitionCause},
    plugins::FlightPlugin,
    resources::{ClockMode, SimulationConfig, SimulationConfigBuilder},
    utils::SimError,
};
use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

use crate::common::{
    assert_phase_changes, assert_state_valid, create_flying_state, full_throttle, hold_attitude,
    TestAppBuilder,
};

#[test]
fn test_aircraft_spawns_parked() {
    let mut app = TestAppBuilder::new().build();

    let model = app.aircraft().expect("Aircraft not found");
    assert_eq!(model.phase(), FlightPhase::Grounded);
    assert_eq!(model.state(), &AircraftState::default());

    let transform = app.query_single::<Transform>().expect("Transform not found");
    assert_eq!(transform.translation, Vec3::new(0.0, 1.0, 0.0));
    assert!(app.phase_log().is_empty());
}

#[test]
fn test_takeoff_roll_and_climb() {
    let mut app = TestAppBuilder::new().build();

    app.set_controls(full_throttle());
    let rotated = app.run_until(600, |model| model.speed() > 60.0);
    assert!(rotated, "Aircraft never reached rotation speed");
    assert_eq!(app.aircraft().map(|m| m.phase()), Some(FlightPhase::Grounded));

    for _ in 0..600 {
        let input = app
            .aircraft()
            .map(|model| hold_attitude(model, 12f64.to_radians(), 90.0))
            .unwrap_or_default();
        app.set_controls(input);
        app.run_frame();
    }

    let model = app.aircraft().expect("Aircraft not found");
    assert_state_valid(model.state(), model.config().max_speed);
    assert_eq!(model.phase(), FlightPhase::Airborne);
    assert!(model.state().was_airborne);
    assert!(model.position().y > 100.0);
    assert_phase_changes(
        app.phase_log(),
        &[(FlightPhase::Airborne, TransitionCause::Takeoff)],
    );
}

#[test]
fn test_transform_follows_model() {
    let mut app = TestAppBuilder::new().build();
    let mut state = create_flying_state(Vector3::new(0.0, 500.0, 0.0), 0.0, 80.0);
    state.orientation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), PI / 2.0);
    app.place_aircraft(state);
    app.run_steps(10);

    let position = *app.aircraft().expect("Aircraft not found").position();
    let transform = app.query_single::<Transform>().expect("Transform not found");
    assert_relative_eq!(transform.translation.x as f64, position.x, epsilon = 1e-2);
    assert_relative_eq!(transform.translation.y as f64, position.y, epsilon = 1e-2);
    // Nose swung to -x
    assert!(position.x < -10.0);
    let nose = transform.rotation * Vec3::NEG_Z;
    assert!(nose.x < -0.99);
}

#[test]
fn test_stall_and_recovery_events() {
    let mut app = TestAppBuilder::new().build();
    app.place_aircraft(create_flying_state(Vector3::new(0.0, 2_000.0, 0.0), 0.0, 41.0));

    let stalled = app.run_until(300, FlightModel::is_stalled);
    assert!(stalled, "Aircraft never stalled");

    app.set_controls(full_throttle());
    let recovered = app.run_until(300, |model| model.phase() == FlightPhase::Airborne);
    assert!(recovered, "Aircraft never recovered");

    assert_phase_changes(
        app.phase_log(),
        &[
            (FlightPhase::Stalled, TransitionCause::StallEntered),
            (FlightPhase::Airborne, TransitionCause::StallRecovered),
        ],
    );
}

#[test]
fn test_wall_clock_config_runs() {
    let config = SimulationConfigBuilder::new()
        .clock(ClockMode::WallClock)
        .max_time_step(0.05)
        .build()
        .expect("Config should be valid");
    let mut app = TestAppBuilder::new().with_config(config).build();
    app.place_aircraft(create_flying_state(Vector3::new(0.0, 800.0, 0.0), 0.0, 80.0));
    app.run_steps(20);

    let model = app.aircraft().expect("Aircraft not found");
    assert_state_valid(model.state(), model.config().max_speed);
    assert!(model.position().y > 700.0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = SimulationConfig {
        flight: FlightConfig {
            min_speed: 100.0,
            max_speed: 50.0,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(
        FlightPlugin::try_new(config.clone()),
        Err(SimError::InvalidConfig(_))
    ));

    // The plugin falls back to defaults instead of flying with an inverted speed range
    let mut app = TestAppBuilder::new().with_config(config).build();
    app.set_controls(full_throttle());
    app.run_steps(30);

    let model = app.aircraft().expect("Aircraft not found");
    assert_eq!(model.config().max_speed, FlightConfig::default().max_speed);
    assert!(model.speed() > 0.0);
    let active = app.get_state::<SimulationConfig>().expect("Config not found");
    assert_eq!(active.flight.min_speed, 0.0);
}
