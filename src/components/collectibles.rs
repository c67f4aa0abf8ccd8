use nalgebra::Vector3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::utils::SimError;

/// Placement and scoring rules for collectibles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectibleConfig {
    pub min_count: usize,
    pub max_count: usize,
    /// Horizontal spawn extent about the origin (m)
    pub spawn_half_extent: f64,
    pub min_altitude: f64,
    pub max_altitude: f64,
    /// 3D distance at which the aircraft picks one up (m)
    pub pickup_radius: f64,
    pub min_points: u32,
    pub max_points: u32,
}

impl Default for CollectibleConfig {
    fn default() -> Self {
        Self {
            min_count: 5,
            max_count: 20,
            spawn_half_extent: 2_000.0,
            min_altitude: 50.0,
            max_altitude: 100.0,
            pickup_radius: 12.0,
            min_points: 1,
            max_points: 100,
        }
    }
}

impl CollectibleConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.min_count > self.max_count {
            return Err(SimError::InvalidConfig(format!(
                "collectible count range [{}, {}] is inverted",
                self.min_count, self.max_count
            )));
        }
        if !(self.min_altitude < self.max_altitude) {
            return Err(SimError::InvalidConfig(format!(
                "collectible altitude range [{}, {}] is empty",
                self.min_altitude, self.max_altitude
            )));
        }
        if self.spawn_half_extent <= 0.0 || self.pickup_radius <= 0.0 {
            return Err(SimError::InvalidConfig(
                "collectible spawn extent and pickup radius must be positive".to_string(),
            ));
        }
        if self.min_points > self.max_points {
            return Err(SimError::InvalidConfig(format!(
                "collectible points range [{}, {}] is inverted",
                self.min_points, self.max_points
            )));
        }
        Ok(())
    }
}

/// A floating pickup worth a fixed number of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub position: Vector3<f64>,
    pub points: u32,
}

impl Collectible {
    /// Draws one collectible inside the configured volume.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &CollectibleConfig) -> Self {
        let extent = config.spawn_half_extent;
        Self {
            position: Vector3::new(
                rng.gen_range(-extent..extent),
                rng.gen_range(config.min_altitude..config.max_altitude),
                rng.gen_range(-extent..extent),
            ),
            points: rng.gen_range(config.min_points..=config.max_points),
        }
    }

    pub fn within_reach(&self, position: &Vector3<f64>, radius: f64) -> bool {
        (self.position - position).norm() < radius
    }
}
