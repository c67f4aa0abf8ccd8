use bevy::prelude::{Quat, Transform, Vec3};
use nalgebra::{Unit, UnitQuaternion, Vector3};

/// Body axes, right-handed with Y up: the nose points down -Z, the right wing along +X.
pub fn body_forward() -> Vector3<f64> {
    -Vector3::z()
}

pub fn body_right() -> Vector3<f64> {
    Vector3::x()
}

pub fn body_up() -> Vector3<f64> {
    Vector3::y()
}

/// Nose direction in world space.
pub fn forward(attitude: &UnitQuaternion<f64>) -> Vector3<f64> {
    attitude * body_forward()
}

/// Right wing direction in world space.
pub fn right(attitude: &UnitQuaternion<f64>) -> Vector3<f64> {
    attitude * body_right()
}

/// Canopy direction in world space.
pub fn up(attitude: &UnitQuaternion<f64>) -> Vector3<f64> {
    attitude * body_up()
}

/// `asin` that tolerates floating point overshoot. NaN maps to zero.
pub fn clamped_asin(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(-1.0, 1.0).asin()
}

/// Nose elevation above the horizon (radians, positive nose up).
pub fn pitch_angle(attitude: &UnitQuaternion<f64>) -> f64 {
    clamped_asin(forward(attitude).y)
}

/// Bank measured from the right wing's vertical component.
///
/// Unlike an Euler decomposition this stays well defined with the nose pointing
/// straight up or down: a pure pitch rotation never tilts the wing, so the result
/// is zero for any pitch.
pub fn bank_angle(attitude: &UnitQuaternion<f64>) -> f64 {
    clamped_asin(right(attitude).y)
}

/// Bank as a yaw-pitch-roll decomposition reports it (positive is left wing down).
///
/// Returns zero once the nose is within numerical reach of vertical, where roll and
/// heading are no longer separable.
pub fn euler_bank(attitude: &UnitQuaternion<f64>) -> f64 {
    let forward = forward(attitude);
    if forward.y.abs() >= 0.999_999_9 {
        return 0.0;
    }
    let right = right(attitude);
    let up = up(attitude);
    right.y.atan2(up.y)
}

/// Heading about the vertical axis (radians, zero looking down -Z, positive turning left).
pub fn heading(attitude: &UnitQuaternion<f64>) -> f64 {
    let forward = forward(attitude);
    if forward.y.abs() >= 0.999_999_9 {
        let right = right(attitude);
        return (-right.z).atan2(right.x);
    }
    (-forward.x).atan2(-forward.z)
}

/// Rotates about a body axis, returning a fresh unit quaternion.
pub fn rotate_body(
    attitude: &UnitQuaternion<f64>,
    axis: &Unit<Vector3<f64>>,
    angle: f64,
) -> UnitQuaternion<f64> {
    let mut rotated = attitude * UnitQuaternion::from_axis_angle(axis, angle);
    rotated.renormalize();
    rotated
}

/// Wings level, nose on the horizon, heading preserved.
pub fn level_attitude(attitude: &UnitQuaternion<f64>) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), heading(attitude))
}

/// Distance between two points in the horizontal (x, z) plane.
pub fn planar_distance(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}

/// Horizontal distance from the world origin.
pub fn radial_distance(position: &Vector3<f64>) -> f64 {
    position.x.hypot(position.z)
}

/// Converts simulation state to a render transform.
pub fn to_render_transform(position: &Vector3<f64>, attitude: &UnitQuaternion<f64>) -> Transform {
    let q = attitude.quaternion();
    Transform {
        translation: Vec3::new(position.x as f32, position.y as f32, position.z as f32),
        rotation: Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32).normalize(),
        ..Default::default()
    }
}
