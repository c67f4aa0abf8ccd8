#![allow(dead_code)]

mod fixtures;
mod helpers;
mod test_app;

// Re-export
pub use assertions::{assert_phase_changes, assert_position_eq, assert_state_valid};

pub use helpers::*;

pub use fixtures::*;
pub use test_app::{PhaseLog, PickupLog, TestApp, TestAppBuilder};
