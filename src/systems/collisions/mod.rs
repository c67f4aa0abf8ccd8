mod detection;

pub use detection::obstacle_collision_system;
