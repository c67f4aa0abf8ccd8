mod reset;
mod step;

pub use reset::reset_request_system;
pub use step::flight_step_system;
