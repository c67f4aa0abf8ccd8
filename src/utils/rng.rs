use bevy::prelude::Resource;
use rand_chacha::ChaCha8Rng;
use rand_seeder::Seeder;
use serde::{Deserialize, Serialize};

/// Hands out reproducible RNG streams, one per named consumer.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Seeds a fresh stream from the master seed and the consumer name.
    pub fn get_rng(&self, name: &str) -> ChaCha8Rng {
        Seeder::from((self.master_seed, name)).make_rng()
    }
}
