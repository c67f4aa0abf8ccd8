use aerobat::components::{FlightPhase, Obstacle, TransitionCause};
use nalgebra::Vector3;

use crate::common::{assert_phase_changes, create_flying_state, TestAppBuilder};

#[test]
fn test_flying_into_hangar() {
    let mut app = TestAppBuilder::new().build();
    // Heading down -z toward the hangar at (120, 10, -300)
    app.place_aircraft(create_flying_state(Vector3::new(120.0, 8.0, -200.0), 0.0, 60.0));

    let crashed = app.run_until(300, |model| model.phase() == FlightPhase::Crashed);
    assert!(crashed, "Aircraft passed through the hangar");

    let model = app.aircraft().expect("Aircraft not found");
    assert_eq!(model.speed(), 0.0);
    assert!(model.position().z < -270.0 + 1.0);
}

#[test]
fn test_collision_reported_once() {
    let mut app = TestAppBuilder::new()
        .with_obstacles(vec![Obstacle::new(Vector3::new(0.0, 400.0, -50.0), 40.0)])
        .build();
    app.place_aircraft(create_flying_state(Vector3::new(0.0, 400.0, 0.0), 0.0, 80.0));
    app.run_steps(120);

    assert_phase_changes(
        app.phase_log(),
        &[(FlightPhase::Crashed, TransitionCause::ObstacleImpact)],
    );
}

#[test]
fn test_overflying_obstacles_is_safe() {
    let mut app = TestAppBuilder::new().build();
    app.place_aircraft(create_flying_state(Vector3::new(120.0, 60.0, 0.0), 0.0, 80.0));
    app.run_steps(300);

    let model = app.aircraft().expect("Aircraft not found");
    assert_eq!(model.phase(), FlightPhase::Airborne);
    assert!(app.phase_log().is_empty());
}
