pub mod records;
pub mod strength;

pub use records::{ICheckInSource, IRatingSource};
pub use strength::IStrengthSource;
