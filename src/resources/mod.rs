pub mod config;
mod collectibles;
mod world;

pub use collectibles::{CollectibleField, Score};
pub use config::{ClockMode, SimulationConfig, SimulationConfigBuilder};
pub use world::WorldGeometry;
