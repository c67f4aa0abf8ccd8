use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::{euler_bank, pitch_angle, SimError};

/// Acceptance envelope for a touchdown on the runway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingEnvelope {
    /// Runway extent about the origin (m)
    pub runway_half_width: f64,
    pub runway_half_length: f64,
    /// Acceptable touchdown speed (m/s)
    pub min_speed: f64,
    pub max_speed: f64,
    /// Acceptable pitch, nose slightly down (radians)
    pub min_pitch: f64,
    pub max_pitch: f64,
    /// Maximum bank magnitude (radians)
    pub max_bank: f64,
    /// A touchdown slower than this with a near level attitude rolls out instead of crashing
    pub rollout_max_speed: f64,
    /// Pitch and bank magnitude tolerated during roll-out (radians)
    pub rollout_max_attitude: f64,
}

impl Default for LandingEnvelope {
    fn default() -> Self {
        Self {
            runway_half_width: 50.0,
            runway_half_length: 500.0,
            min_speed: 40.0,
            max_speed: 90.0,
            min_pitch: (-10.0f64).to_radians(),
            max_pitch: (-1.0f64).to_radians(),
            max_bank: 5.0f64.to_radians(),
            rollout_max_speed: 80.0,
            rollout_max_attitude: 0.2,
        }
    }
}

impl LandingEnvelope {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.min_speed > self.max_speed {
            return Err(SimError::InvalidConfig(format!(
                "landing speed window [{}, {}] is inverted",
                self.min_speed, self.max_speed
            )));
        }
        if self.min_pitch > self.max_pitch {
            return Err(SimError::InvalidConfig(format!(
                "landing pitch window [{}, {}] is inverted",
                self.min_pitch, self.max_pitch
            )));
        }
        if self.runway_half_width <= 0.0 || self.runway_half_length <= 0.0 {
            return Err(SimError::InvalidConfig(
                "runway extent must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn on_runway(&self, position: &Vector3<f64>) -> bool {
        position.x.abs() < self.runway_half_width && position.z.abs() < self.runway_half_length
    }
}

/// Why a touchdown was not accepted as a landing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandingFault {
    OffRunway,
    TooFast,
    TooSlow,
    BadPitch,
    BadBank,
}

/// Outcome of touching the ground after flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchdownVerdict {
    Landed,
    /// Not a clean landing but gentle enough to level off and keep rolling
    RollOut,
    Crash(LandingFault),
}

/// Classifies ground contact from position, speed and attitude.
pub fn evaluate_touchdown(
    position: &Vector3<f64>,
    speed: f64,
    attitude: &UnitQuaternion<f64>,
    envelope: &LandingEnvelope,
) -> TouchdownVerdict {
    let pitch = pitch_angle(attitude);
    let bank = euler_bank(attitude);

    let fault = landing_fault(position, speed, pitch, bank, envelope);
    let Some(fault) = fault else {
        return TouchdownVerdict::Landed;
    };

    if fault != LandingFault::OffRunway
        && speed < envelope.rollout_max_speed
        && pitch.abs() < envelope.rollout_max_attitude
        && bank.abs() < envelope.rollout_max_attitude
    {
        return TouchdownVerdict::RollOut;
    }

    TouchdownVerdict::Crash(fault)
}

fn landing_fault(
    position: &Vector3<f64>,
    speed: f64,
    pitch: f64,
    bank: f64,
    envelope: &LandingEnvelope,
) -> Option<LandingFault> {
    if !envelope.on_runway(position) {
        return Some(LandingFault::OffRunway);
    }
    if speed > envelope.max_speed {
        return Some(LandingFault::TooFast);
    }
    if speed < envelope.min_speed {
        return Some(LandingFault::TooSlow);
    }
    if pitch < envelope.min_pitch || pitch > envelope.max_pitch {
        return Some(LandingFault::BadPitch);
    }
    if bank.abs() > envelope.max_bank {
        return Some(LandingFault::BadBank);
    }
    None
}
