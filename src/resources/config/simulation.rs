use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fs::File, path::Path};

use crate::{
    components::{aircraft::FlightConfig, collectibles::CollectibleConfig},
    utils::{Result, SimError},
};

/// How each frame's time step is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockMode {
    /// Every frame advances by `time_step`
    #[default]
    Fixed,
    /// Frames advance by the measured frame time
    WallClock,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub clock: ClockMode,
    /// Step length in fixed mode (s)
    pub time_step: f64,
    /// Upper bound on a wall clock step (s); a long stall is not replayed in one step
    pub max_time_step: Option<f64>,
    pub seed: u64,
    pub flight: FlightConfig,
    pub collectibles: CollectibleConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            clock: ClockMode::Fixed,
            time_step: 1.0 / 60.0,
            max_time_step: Some(0.1),
            seed: 42,
            flight: FlightConfig::default(),
            collectibles: CollectibleConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.time_step > 0.0 && self.time_step.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "time step must be positive, got {}",
                self.time_step
            )));
        }
        if let Some(max) = self.max_time_step {
            if !(max > 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "max time step must be positive, got {}",
                    max
                )));
            }
        }
        self.flight.validate()?;
        self.collectibles.validate()
    }

    /// Step length for a frame that took `frame_time` seconds.
    pub fn step_length(&self, frame_time: f64) -> f64 {
        match self.clock {
            ClockMode::Fixed => self.time_step,
            ClockMode::WallClock => match self.max_time_step {
                Some(max) => frame_time.min(max),
                None => frame_time,
            },
        }
    }
}
