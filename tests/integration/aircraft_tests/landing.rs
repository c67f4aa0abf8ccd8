use aerobat::{
    components::{ControlInput, FlightPhase, LandingFault, TransitionCause},
    plugins::ResetKind,
};
use nalgebra::Vector3;

use crate::common::{
    assert_phase_changes, assert_position_eq, create_hills, create_plateau,
    create_touchdown_state, hold_attitude, TestAppBuilder,
};

#[test]
fn test_touchdown_in_envelope_lands() {
    let mut app = TestAppBuilder::new().build();
    app.place_aircraft(create_touchdown_state(70.0));
    app.run_frame();

    let model = app.aircraft().expect("Aircraft not found");
    assert_eq!(model.phase(), FlightPhase::Landed);
    let frozen = model.state().clone();

    // Landed aircraft stay put whatever the pilot does
    app.set_controls(ControlInput::new(1.0, 1.0, 1.0).with_throttle(1.0));
    app.run_steps(30);
    assert_eq!(app.aircraft().map(|m| m.state().clone()), Some(frozen));

    assert_phase_changes(
        app.phase_log(),
        &[(FlightPhase::Landed, TransitionCause::Landing)],
    );
}

#[test]
fn test_fast_touchdown_crashes() {
    let mut app = TestAppBuilder::new().build();
    app.place_aircraft(create_touchdown_state(150.0));
    app.run_frame();

    let model = app.aircraft().expect("Aircraft not found");
    assert_eq!(model.phase(), FlightPhase::Crashed);
    assert_eq!(model.speed(), 0.0);
    assert_phase_changes(
        app.phase_log(),
        &[(
            FlightPhase::Crashed,
            TransitionCause::FailedLanding(LandingFault::TooFast),
        )],
    );
}

#[test]
fn test_practice_approach_to_landing() {
    let mut app = TestAppBuilder::new().build();
    app.request_reset(ResetKind::PracticeLanding);
    app.run_frame();

    let start = *app.aircraft().expect("Aircraft not found").position();
    assert!(start.y > 140.0 && start.z < -990.0);

    // Eight degree glide at 65 m/s
    let mut landed = false;
    for _ in 0..3_000 {
        let Some(input) = app
            .aircraft()
            .map(|model| hold_attitude(model, (-8f64).to_radians(), 65.0))
        else {
            break;
        };
        app.set_controls(input);
        app.run_frame();

        let phase = app.aircraft().map(|model| model.phase());
        if phase == Some(FlightPhase::Landed) {
            landed = true;
            break;
        }
        assert_ne!(phase, Some(FlightPhase::Crashed), "Crashed on approach");
    }
    assert!(landed, "Approach never touched down");

    let model = app.aircraft().expect("Aircraft not found");
    assert!(model.position().z.abs() < 500.0);
    assert!(model.position().x.abs() < 1.0);
}

#[test]
fn test_terrain_impact_outside_airport() {
    let mut app = TestAppBuilder::new()
        .with_terrain(create_plateau(50.0))
        .build();
    let mut state = create_touchdown_state(80.0);
    state.position = Vector3::new(1_000.0, 55.0, 0.0);
    app.place_aircraft(state);

    let crashed = app.run_until(120, |model| model.phase() == FlightPhase::Crashed);
    assert!(crashed, "Aircraft flew through the plateau");

    let model = app.aircraft().expect("Aircraft not found");
    assert_eq!(model.speed(), 0.0);
    assert!(model.position().y < 52.0);
    assert_phase_changes(
        app.phase_log(),
        &[(FlightPhase::Crashed, TransitionCause::TerrainImpact)],
    );
}

#[test]
fn test_airport_is_clear_of_terrain_checks() {
    let mut app = TestAppBuilder::new().with_terrain(create_hills()).build();
    app.run_steps(60);

    let model = app.aircraft().expect("Aircraft not found");
    assert_eq!(model.phase(), FlightPhase::Grounded);
    assert_position_eq(model.position(), &Vector3::new(0.0, 1.0, 0.0), 1e-9);
}
