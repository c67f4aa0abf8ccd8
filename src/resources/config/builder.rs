use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::{
    components::{aircraft::FlightConfig, collectibles::CollectibleConfig},
    resources::config::{ClockMode, SimulationConfig},
    utils::Result,
};

/// Assembles a [`SimulationConfig`] from optional overrides.
#[derive(Default, Debug, Serialize, Clone, Deserialize)]
pub struct SimulationConfigBuilder {
    pub clock: Option<ClockMode>,
    pub time_step: Option<f64>,
    pub max_time_step: Option<f64>,
    pub seed: Option<u64>,
    pub flight: Option<FlightConfig>,
    pub collectibles: Option<CollectibleConfig>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clock(mut self, clock: ClockMode) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn time_step(mut self, dt: f64) -> Self {
        self.time_step = Some(dt);
        self
    }

    pub fn max_time_step(mut self, dt: f64) -> Self {
        self.max_time_step = Some(dt);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn flight(mut self, flight: FlightConfig) -> Self {
        self.flight = Some(flight);
        self
    }

    pub fn collectibles(mut self, collectibles: CollectibleConfig) -> Self {
        self.collectibles = Some(collectibles);
        self
    }

    /// Reads whichever top level keys are present in a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(source)?;
        let mut builder = Self::new();

        if let Some(clock) = value.get("clock") {
            builder = builder.clock(serde_yaml::from_value(clock.clone())?);
        }
        if let Some(time_step) = value.get("time_step").and_then(|v| v.as_f64()) {
            builder = builder.time_step(time_step);
        }
        if let Some(max_time_step) = value.get("max_time_step").and_then(|v| v.as_f64()) {
            builder = builder.max_time_step(max_time_step);
        }
        if let Some(seed) = value.get("seed").and_then(|v| v.as_u64()) {
            builder = builder.seed(seed);
        }
        if let Some(flight) = value.get("flight") {
            builder = builder.flight(serde_yaml::from_value(flight.clone())?);
        }
        if let Some(collectibles) = value.get("collectibles") {
            builder = builder.collectibles(serde_yaml::from_value(collectibles.clone())?);
        }

        Ok(builder)
    }

    pub fn build(self) -> Result<SimulationConfig> {
        let mut config = SimulationConfig::default();

        if let Some(clock) = self.clock {
            config.clock = clock;
        }
        if let Some(time_step) = self.time_step {
            config.time_step = time_step;
        }
        if let Some(max_time_step) = self.max_time_step {
            config.max_time_step = Some(max_time_step);
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(flight) = self.flight {
            config.flight = flight;
        }
        if let Some(collectibles) = self.collectibles {
            config.collectibles = collectibles;
        }

        config.validate()?;
        Ok(config)
    }
}
