use bevy::prelude::*;

use crate::components::{
    collision::{airport_obstacles, Obstacle},
    terrain::{TerrainHandle, TerrainSampler},
};

/// Static world geometry the aircraft flies through.
///
/// Built once when the world is set up and read-only for the rest of the session.
#[derive(Resource, Debug, Clone, Default)]
pub struct WorldGeometry {
    pub terrain: TerrainHandle,
    pub obstacles: Vec<Obstacle>,
}

impl WorldGeometry {
    pub fn new(terrain: TerrainHandle, obstacles: Vec<Obstacle>) -> Self {
        Self { terrain, obstacles }
    }

    /// Detached terrain and the standard airport buildings.
    pub fn airport() -> Self {
        Self::new(TerrainHandle::detached(), airport_obstacles())
    }

    pub fn with_terrain<T>(mut self, terrain: T) -> Self
    where
        T: TerrainSampler + Send + Sync + 'static,
    {
        self.terrain = TerrainHandle::new(terrain);
        self
    }

    pub fn height(&self, x: f64, z: f64) -> f64 {
        self.terrain.ground_height(x, z)
    }
}
