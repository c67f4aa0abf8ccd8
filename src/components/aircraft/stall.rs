use serde::{Deserialize, Serialize};

use crate::components::aircraft::{ControlInput, FlightConfig, StallConfig};

/// Body rotations requested for one step (radians).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationDeltas {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

impl RotationDeltas {
    /// Unmodified pilot demand at full control authority.
    pub fn from_input(input: &ControlInput, config: &FlightConfig, dt: f64) -> Self {
        Self {
            pitch: input.pitch * config.pitch_rate * dt,
            roll: input.roll * config.roll_rate * dt,
            yaw: input.yaw * config.yaw_rate * dt,
        }
    }
}

/// Aircraft state the stall model reacts to.
#[derive(Debug, Clone, Copy)]
pub struct StallContext {
    pub speed: f64,
    /// Height above the terrain directly below [m]
    pub agl: f64,
    /// Current nose elevation [rad]
    pub pitch: f64,
    /// Current bank from the right wing vector [rad]
    pub bank: f64,
    pub roll_input: f64,
    pub roll_rate: f64,
    pub dt: f64,
}

/// Reshapes pilot demand while the wing is stalled.
///
/// Authority is cut (harder near the ground), the nose is pulled toward the target dive
/// in proportion to how far below stall speed the aircraft is, and the wings are forced
/// back toward level.
pub fn recover(deltas: RotationDeltas, ctx: &StallContext, config: &StallConfig) -> RotationDeltas {
    let authority = if ctx.agl > config.high_agl_threshold {
        config.high_agl_authority
    } else {
        config.low_agl_authority
    };

    let mut pitch = deltas.pitch * authority;
    let mut roll = deltas.roll;
    let mut yaw = deltas.yaw;

    let severity = 1.0 - ctx.speed / config.stall_speed;
    let pitch_error = config.target_pitch - ctx.pitch;
    if ctx.pitch > config.target_pitch + config.vertical_margin {
        pitch += pitch_error * severity * config.nose_down_gain * ctx.dt;
    } else {
        pitch *= config.vertical_pitch_damping;
    }

    if ctx.pitch < config.steep_dive_pitch {
        roll *= config.steep_dive_damping;
        yaw *= config.steep_dive_damping;
        roll -= ctx.bank * config.steep_dive_level_gain * ctx.dt;
    } else {
        roll = ctx.roll_input * ctx.roll_rate * ctx.dt * authority
            - ctx.bank * config.roll_stability * ctx.dt;
        yaw *= config.yaw_authority;
    }

    RotationDeltas { pitch, roll, yaw }
}
