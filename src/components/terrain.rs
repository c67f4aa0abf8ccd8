use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

use crate::utils::{TERRAIN_DIVISIONS, WORLD_SIZE};

/// Source of ground height under a horizontal position.
///
/// Samplers must be total: positions they know nothing about report 0.
pub trait TerrainSampler {
    fn height(&self, x: f64, z: f64) -> f64;

    /// `height`, with non-finite samples read as 0.
    fn ground_height(&self, x: f64, z: f64) -> f64 {
        let height = self.height(x, z);
        if height.is_finite() {
            height
        } else {
            0.0
        }
    }
}

impl<F> TerrainSampler for F
where
    F: Fn(f64, f64) -> f64,
{
    fn height(&self, x: f64, z: f64) -> f64 {
        self(x, z)
    }
}

/// Shared, possibly absent terrain source.
///
/// A detached handle (the default) reads as flat ground everywhere, which is what the
/// aircraft sees before the world attaches its height field.
#[derive(Clone, Default)]
pub struct TerrainHandle(Option<Arc<dyn TerrainSampler + Send + Sync>>);

impl TerrainHandle {
    pub fn new<T>(sampler: T) -> Self
    where
        T: TerrainSampler + Send + Sync + 'static,
    {
        let sampler: Arc<dyn TerrainSampler + Send + Sync> = Arc::new(sampler);
        Self(Some(sampler))
    }

    pub fn detached() -> Self {
        Self(None)
    }

    pub fn is_attached(&self) -> bool {
        self.0.is_some()
    }
}

impl TerrainSampler for TerrainHandle {
    fn height(&self, x: f64, z: f64) -> f64 {
        self.0.as_ref().map_or(0.0, |terrain| terrain.ground_height(x, z))
    }
}

impl fmt::Debug for TerrainHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerrainHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatTerrain;

impl TerrainSampler for FlatTerrain {
    fn height(&self, _x: f64, _z: f64) -> f64 {
        0.0
    }
}

/// Square height field centred on the origin, stored per grid vertex.
///
/// Lookups snap to the vertex at the lower corner of the containing cell, matching the
/// resolution the world was built with. Positions outside the grid report 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightGrid {
    world_size: f64,
    divisions: usize,
    /// Row-major vertex heights, `(divisions + 1)²` entries, rows along +z
    heights: Vec<f64>,
}

impl HeightGrid {
    /// Samples `height_fn` at every vertex of the grid.
    pub fn from_fn<F>(world_size: f64, divisions: usize, height_fn: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        let divisions = divisions.max(1);
        let step = world_size / divisions as f64;
        let half = world_size / 2.0;
        let stride = divisions + 1;

        let mut heights = Vec::with_capacity(stride * stride);
        for row in 0..stride {
            let z = row as f64 * step - half;
            for col in 0..stride {
                let x = col as f64 * step - half;
                heights.push(height_fn(x, z));
            }
        }

        Self {
            world_size,
            divisions,
            heights,
        }
    }

    /// A grid with the default world extent and resolution.
    pub fn with_default_extent<F>(height_fn: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        Self::from_fn(WORLD_SIZE, TERRAIN_DIVISIONS, height_fn)
    }

    pub fn world_size(&self) -> f64 {
        self.world_size
    }

    pub fn divisions(&self) -> usize {
        self.divisions
    }

    fn cell_index(&self, coordinate: f64) -> Option<usize> {
        let cell = ((coordinate + self.world_size / 2.0) / self.world_size * self.divisions as f64)
            .floor();
        if cell.is_nan() || cell < 0.0 || cell >= self.divisions as f64 {
            return None;
        }
        Some(cell as usize)
    }
}

impl TerrainSampler for HeightGrid {
    fn height(&self, x: f64, z: f64) -> f64 {
        let (Some(col), Some(row)) = (self.cell_index(x), self.cell_index(z)) else {
            return 0.0;
        };
        let height = self.heights[row * (self.divisions + 1) + col];
        if height.is_finite() {
            height
        } else {
            0.0
        }
    }
}
