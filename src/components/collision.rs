use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{planar_distance, OBSTACLE_CLEARANCE};

/// Static obstacle approximated by a vertical cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Center of the structure in world space [m]
    pub center: Vector3<f64>,
    /// Horizontal extent [m]
    pub radius: f64,
}

impl Obstacle {
    pub fn new(center: Vector3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// True when `position` is inside the horizontal footprint and below the top.
    pub fn contains(&self, position: &Vector3<f64>) -> bool {
        planar_distance(position, &self.center) < self.radius
            && position.y < self.center.y + OBSTACLE_CLEARANCE
    }
}

/// Point-versus-obstacle test over a fixed obstacle set.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionResolver;

impl CollisionResolver {
    /// Index of the first obstacle containing `position`.
    pub fn check(position: &Vector3<f64>, obstacles: &[Obstacle]) -> Option<usize> {
        obstacles
            .iter()
            .position(|obstacle| obstacle.contains(position))
    }
}

/// The hangar row east of the runway and the control tower beside it.
pub fn airport_obstacles() -> Vec<Obstacle> {
    const HANGAR_COUNT: usize = 5;
    const HANGAR_X: f64 = 120.0;
    const HANGAR_START_Z: f64 = -300.0;
    const HANGAR_SPACING: f64 = 150.0;

    let mut obstacles: Vec<Obstacle> = (0..HANGAR_COUNT)
        .map(|i| {
            Obstacle::new(
                Vector3::new(HANGAR_X, 10.0, HANGAR_START_Z + i as f64 * HANGAR_SPACING),
                30.0,
            )
        })
        .collect();
    obstacles.push(Obstacle::new(Vector3::new(HANGAR_X + 50.0, 20.0, 0.0), 20.0));
    obstacles
}
