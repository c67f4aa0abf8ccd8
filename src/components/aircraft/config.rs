use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

use crate::components::tasks::LandingEnvelope;
use crate::utils::{SimError, GRAVITY, RUNWAY_RADIUS};

/// Tunables of the arcade flight model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Airspeed limits (m/s).
    pub min_speed: f64,
    pub max_speed: f64,
    /// Throttle and brake authority (m/s²).
    pub acceleration: f64,
    /// Fraction of speed lost per second with neither throttle nor brake.
    pub drag_coefficient: f64,
    /// Scales how strongly diving trades altitude for speed.
    pub dive_gain: f64,
    pub gravity: f64,
    /// Speed at which lift exactly cancels gravity in level flight (m/s).
    pub lift_reference_speed: f64,

    /// Control rates at full deflection (rad/s).
    pub pitch_rate: f64,
    pub roll_rate: f64,
    pub yaw_rate: f64,
    /// Yaw rate per radian of bank.
    pub banking_turn_rate: f64,
    /// Roll correction per radian of bank while the stick is centered.
    pub auto_level_rate: f64,

    pub stall: StallConfig,
    pub ground: GroundConfig,
    pub landing: LandingEnvelope,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            min_speed: 0.0,
            max_speed: 200.0,
            acceleration: 50.0,
            drag_coefficient: 0.1,
            dive_gain: 2.0,
            gravity: GRAVITY,
            lift_reference_speed: 50.0,
            pitch_rate: 1.5,
            roll_rate: 2.0,
            yaw_rate: 0.5,
            banking_turn_rate: 1.5,
            auto_level_rate: 1.0,
            stall: StallConfig::default(),
            ground: GroundConfig::default(),
            landing: LandingEnvelope::default(),
        }
    }
}

impl FlightConfig {
    /// Clamps into `[min_speed, max_speed]`. NaN reads as `min_speed`, and an inverted
    /// range resolves to `max_speed` rather than panicking.
    pub fn clamp_speed(&self, speed: f64) -> f64 {
        if speed.is_nan() {
            return self.min_speed.min(self.max_speed);
        }
        speed.max(self.min_speed).min(self.max_speed)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.min_speed >= 0.0 && self.min_speed <= self.max_speed) {
            return Err(SimError::InvalidConfig(format!(
                "speed range [{}, {}] must be non-negative and ordered",
                self.min_speed, self.max_speed
            )));
        }
        if self.gravity <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }
        if self.lift_reference_speed <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "lift reference speed must be positive, got {}",
                self.lift_reference_speed
            )));
        }
        if self.stall.stall_speed <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "stall speed must be positive, got {}",
                self.stall.stall_speed
            )));
        }
        if self.ground.contact_altitude >= self.ground.airborne_altitude {
            return Err(SimError::InvalidConfig(format!(
                "airborne altitude {} must exceed contact altitude {}",
                self.ground.airborne_altitude, self.ground.contact_altitude
            )));
        }
        self.landing.validate()
    }
}

/// Stall onset and the recovery behaviour forced on the pilot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StallConfig {
    pub stall_speed: f64,
    /// Height above ground separating recoverable from near-ground stalls (m).
    pub high_agl_threshold: f64,
    pub high_agl_authority: f64,
    pub low_agl_authority: f64,
    /// The stalled nose is driven toward this pitch (radians).
    pub target_pitch: f64,
    pub vertical_margin: f64,
    pub nose_down_gain: f64,
    pub vertical_pitch_damping: f64,
    /// Below this pitch the dive counts as steep (radians).
    pub steep_dive_pitch: f64,
    pub steep_dive_damping: f64,
    pub steep_dive_level_gain: f64,
    pub roll_stability: f64,
    pub yaw_authority: f64,
}

impl Default for StallConfig {
    fn default() -> Self {
        Self {
            stall_speed: 40.0,
            high_agl_threshold: 100.0,
            high_agl_authority: 0.3,
            low_agl_authority: 0.1,
            target_pitch: -FRAC_PI_2,
            vertical_margin: 0.1,
            nose_down_gain: 4.0,
            vertical_pitch_damping: 0.1,
            steep_dive_pitch: -FRAC_PI_3,
            steep_dive_damping: 0.1,
            steep_dive_level_gain: 5.0,
            roll_stability: 2.0,
            yaw_authority: 0.05,
        }
    }
}

/// Ground contact and terrain clearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    /// Altitude at which the gear touches (m).
    pub contact_altitude: f64,
    /// Altitude that arms landing and crash evaluation (m).
    pub airborne_altitude: f64,
    /// Fraction of speed lost per second while rolling.
    pub rolling_friction: f64,
    pub stop_speed: f64,
    /// Terrain outside this radius is tested for impact (m).
    pub runway_radius: f64,
    pub terrain_margin: f64,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            contact_altitude: 1.0,
            airborne_altitude: 5.0,
            rolling_friction: 0.5,
            stop_speed: 0.1,
            runway_radius: RUNWAY_RADIUS,
            terrain_margin: 2.0,
        }
    }
}
