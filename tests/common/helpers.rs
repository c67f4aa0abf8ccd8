use aerobat::components::{ControlInput, FlightModel};

/// Proportional pitch and speed hold, enough to fly a straight approach or climb.
pub fn hold_attitude(model: &FlightModel, target_pitch: f64, target_speed: f64) -> ControlInput {
    let pitch = (target_pitch - model.current_pitch()) * 4.0;
    let speed_error = target_speed - model.speed();
    ControlInput::new(pitch, 0.0, 0.0)
        .with_throttle((speed_error * 0.2).max(0.0))
        .with_brake((-speed_error * 0.2).max(0.0))
        .clamped()
}

pub fn full_throttle() -> ControlInput {
    ControlInput::default().with_throttle(1.0)
}
