mod collectibles;
mod collisions;
mod flight;
mod render;

pub use collectibles::collectible_pickup_system;
pub use collisions::obstacle_collision_system;
pub use flight::{flight_step_system, reset_request_system};
pub use render::sync_transform_system;
