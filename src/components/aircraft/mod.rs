mod config;
mod controls;
mod model;
pub mod stall;
mod state;

pub use config::{FlightConfig, GroundConfig, StallConfig};
pub use controls::{ControlInput, DigitalControls};
pub use model::{FlightModel, StepOutcome};
pub use state::{AircraftState, FlightPhase, PhaseTransition, TransitionCause};
