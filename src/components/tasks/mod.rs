mod landing;

pub use landing::{evaluate_touchdown, LandingEnvelope, LandingFault, TouchdownVerdict};
