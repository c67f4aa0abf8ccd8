use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::tasks::LandingFault;

/// Coarse flight state, derived from the kinematic state by the flight model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightPhase {
    /// On the ground and not yet flown since the last reset.
    #[default]
    Grounded,
    /// Flying, or rolling on the ground after a flight.
    Airborne,
    Stalled,
    Landed,
    Crashed,
}

impl FlightPhase {
    /// Landed and crashed aircraft stay frozen until reset.
    pub fn is_terminal(self) -> bool {
        matches!(self, FlightPhase::Landed | FlightPhase::Crashed)
    }
}

impl fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlightPhase::Grounded => "grounded",
            FlightPhase::Airborne => "airborne",
            FlightPhase::Stalled => "stalled",
            FlightPhase::Landed => "landed",
            FlightPhase::Crashed => "crashed",
        };
        f.write_str(name)
    }
}

/// What drove a phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionCause {
    Takeoff,
    StallEntered,
    StallRecovered,
    Landing,
    FailedLanding(LandingFault),
    TerrainImpact,
    ObstacleImpact,
    Reset,
    PracticeLanding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTransition {
    pub from: FlightPhase,
    pub to: FlightPhase,
    pub cause: TransitionCause,
}

/// Kinematic state of the aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Position in world space, Y up [m]
    pub position: Vector3<f64>,
    /// Attitude quaternion (rotation from body to world frame)
    pub orientation: UnitQuaternion<f64>,
    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,
    /// Airspeed along the nose [m/s]
    pub speed: f64,
    pub phase: FlightPhase,
    /// Set once the aircraft has climbed clear of the ground since the last reset
    pub was_airborne: bool,
}

impl Default for AircraftState {
    /// Parked at the runway centre, wheels on the ground.
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 1.0, 0.0),
            orientation: UnitQuaternion::identity(),
            velocity: Vector3::zeros(),
            speed: 0.0,
            phase: FlightPhase::Grounded,
            was_airborne: false,
        }
    }
}

impl AircraftState {
    /// A flying aircraft at the given pose and speed.
    pub fn airborne(position: Vector3<f64>, orientation: UnitQuaternion<f64>, speed: f64) -> Self {
        Self {
            position,
            orientation,
            speed,
            phase: FlightPhase::Airborne,
            was_airborne: true,
            ..Default::default()
        }
    }

    /// Altitude above ground level for a given terrain height.
    pub fn agl(&self, terrain_height: f64) -> f64 {
        self.position.y - terrain_height
    }
}
