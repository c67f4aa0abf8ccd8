use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Pilot input for one simulation step.
///
/// Axes are normalised: `pitch`, `roll` and `yaw` in [-1, 1] (positive pulls the nose
/// up, rolls left and yaws left), `throttle` and `brake` in [0, 1].
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
    pub throttle: f64,
    pub brake: f64,
}

impl ControlInput {
    pub fn new(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self {
            pitch,
            roll,
            yaw,
            ..Default::default()
        }
    }

    pub fn with_throttle(mut self, throttle: f64) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn with_brake(mut self, brake: f64) -> Self {
        self.brake = brake;
        self
    }

    /// Forces every axis into its valid range. NaN reads as a centred control.
    pub fn clamped(&self) -> Self {
        fn axis(value: f64, min: f64) -> f64 {
            if value.is_nan() {
                0.0
            } else {
                value.clamp(min, 1.0)
            }
        }

        Self {
            pitch: axis(self.pitch, -1.0),
            roll: axis(self.roll, -1.0),
            yaw: axis(self.yaw, -1.0),
            throttle: axis(self.throttle, 0.0),
            brake: axis(self.brake, 0.0),
        }
    }
}

/// Keyboard style on/off controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalControls {
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub throttle: bool,
    pub brake: bool,
}

impl From<DigitalControls> for ControlInput {
    fn from(keys: DigitalControls) -> Self {
        fn axis(positive: bool, negative: bool) -> f64 {
            f64::from(u8::from(positive)) - f64::from(u8::from(negative))
        }

        Self {
            pitch: axis(keys.pitch_up, keys.pitch_down),
            roll: axis(keys.roll_left, keys.roll_right),
            yaw: axis(keys.yaw_left, keys.yaw_right),
            throttle: f64::from(u8::from(keys.throttle)),
            brake: f64::from(u8::from(keys.brake)),
        }
    }
}
