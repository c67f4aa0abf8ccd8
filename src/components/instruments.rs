use serde::{Deserialize, Serialize};

use crate::{
    components::{
        aircraft::{FlightModel, FlightPhase},
        terrain::TerrainSampler,
    },
    utils::{euler_bank, heading, pitch_angle, radial_distance, SPACE_BOUNDARY, TURN_AROUND_BOUNDARY},
};

/// Where the aircraft sits relative to the edge of the playable world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryZone {
    #[default]
    Inside,
    /// Past the edge of the terrain, over open space
    Space,
    /// Far enough out that the pilot should turn back
    TurnAround,
}

impl BoundaryZone {
    pub fn from_distance(distance: f64) -> Self {
        if distance > TURN_AROUND_BOUNDARY {
            BoundaryZone::TurnAround
        } else if distance > SPACE_BOUNDARY {
            BoundaryZone::Space
        } else {
            BoundaryZone::Inside
        }
    }
}

/// Cockpit display values. Angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentReadout {
    pub speed: f64,
    pub altitude: f64,
    pub agl: f64,
    pub pitch_deg: f64,
    pub bank_deg: f64,
    /// Compass heading in [0, 360), zero along -z
    pub heading_deg: f64,
    pub phase: FlightPhase,
    pub stall_warning: bool,
    pub boundary: BoundaryZone,
}

impl InstrumentReadout {
    pub fn capture<T>(model: &FlightModel, terrain: &T) -> Self
    where
        T: TerrainSampler + ?Sized,
    {
        let state = model.state();
        let position = &state.position;
        let attitude = &state.orientation;

        Self {
            speed: state.speed,
            altitude: position.y,
            agl: state.agl(terrain.ground_height(position.x, position.z)),
            pitch_deg: pitch_angle(attitude).to_degrees(),
            bank_deg: euler_bank(attitude).to_degrees(),
            heading_deg: (-heading(attitude)).to_degrees().rem_euclid(360.0),
            phase: state.phase,
            stall_warning: state.phase == FlightPhase::Stalled,
            boundary: BoundaryZone::from_distance(radial_distance(position)),
        }
    }
}
