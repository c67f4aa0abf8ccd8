mod events;
mod flight;

pub use events::{PhaseChangeEvent, PickupEvent, ResetKind, ResetRequestEvent};
pub use flight::{FlightPlugin, FlightSet};
