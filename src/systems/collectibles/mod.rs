mod pickup;

pub use pickup::collectible_pickup_system;
