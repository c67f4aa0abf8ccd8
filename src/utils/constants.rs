pub const GRAVITY: f64 = 9.8; // m/s^2

// World layout
pub const WORLD_SIZE: f64 = 20_000.0; // Edge length of the square terrain domain (m)
pub const TERRAIN_DIVISIONS: usize = 150; // Grid cells per terrain edge
pub const RUNWAY_RADIUS: f64 = 750.0; // Flat zone around the airport (m)

// Boundary warnings, measured from the origin in the horizontal plane
pub const SPACE_BOUNDARY: f64 = 8_000.0; // m
pub const TURN_AROUND_BOUNDARY: f64 = 8_500.0; // m

// Obstacle cylinders extend this far above their center
pub const OBSTACLE_CLEARANCE: f64 = 10.0; // m
