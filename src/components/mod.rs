pub mod aircraft;
pub mod collectibles;
pub mod collision;
pub mod instruments;
pub mod tasks;
pub mod terrain;

pub use aircraft::{
    AircraftState, ControlInput, DigitalControls, FlightConfig, FlightModel, FlightPhase,
    PhaseTransition, StepOutcome, TransitionCause,
};
pub use collectibles::{Collectible, CollectibleConfig};
pub use collision::{airport_obstacles, CollisionResolver, Obstacle};
pub use instruments::{BoundaryZone, InstrumentReadout};
pub use tasks::{evaluate_touchdown, LandingEnvelope, LandingFault, TouchdownVerdict};
pub use terrain::{FlatTerrain, HeightGrid, TerrainHandle, TerrainSampler};
