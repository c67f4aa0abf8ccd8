mod transform;

pub use transform::sync_transform_system;
