use bevy::prelude::*;
use nalgebra::Vector3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    components::collectibles::{Collectible, CollectibleConfig},
    utils::RngManager,
};

/// Running score for the current session.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub points: u32,
    pub collected: u32,
}

impl Score {
    pub fn add(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
        self.collected += 1;
    }
}

/// Collectibles currently floating in the world.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectibleField {
    items: Vec<Collectible>,
}

impl CollectibleField {
    /// Scatters a fresh set of collectibles.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &CollectibleConfig) -> Self {
        let count = rng.gen_range(config.min_count..=config.max_count);
        let items = (0..count)
            .map(|_| Collectible::random(rng, config))
            .collect();
        Self { items }
    }

    /// Spawns the layout for the `generation`-th reset from a named RNG stream.
    pub fn seeded(rngs: &RngManager, config: &CollectibleConfig, generation: u64) -> Self {
        let mut rng = rngs.get_rng(&format!("collectibles/{}", generation));
        Self::spawn(&mut rng, config)
    }

    pub fn from_items(items: Vec<Collectible>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Collectible] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every collectible within `radius` of `position`.
    pub fn collect(&mut self, position: &Vector3<f64>, radius: f64) -> Vec<Collectible> {
        let (taken, kept): (Vec<_>, Vec<_>) = self
            .items
            .drain(..)
            .partition(|item| item.within_reach(position, radius));
        self.items = kept;
        taken
    }
}
