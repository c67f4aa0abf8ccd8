mod aircraft;
mod terrain;

// Re-export test fixtures
pub use aircraft::*;
pub use terrain::*;
