mod builder;
mod simulation;

pub use builder::SimulationConfigBuilder;
pub use simulation::{ClockMode, SimulationConfig};
