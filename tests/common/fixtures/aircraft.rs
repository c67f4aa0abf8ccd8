use aerobat::components::AircraftState;
use nalgebra::{UnitQuaternion, Vector3};

/// Wings level flight at the given pitch (degrees) and heading down -z.
pub fn create_flying_state(position: Vector3<f64>, pitch_deg: f64, speed: f64) -> AircraftState {
    AircraftState::airborne(
        position,
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), pitch_deg.to_radians()),
        speed,
    )
}

/// On short final for the runway, 5 degrees nose down and just above the ground.
pub fn create_touchdown_state(speed: f64) -> AircraftState {
    create_flying_state(Vector3::new(0.0, 1.0, -100.0), -5.0, speed)
}
