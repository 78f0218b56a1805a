//! # bulwark-adherence
//!
//! Turns daily check-ins and effectiveness ratings into one strength value in
//! [0, 1] per intervention: `weight × days practiced / window length`.
//! A habit-experiment classification, when present, replaces the rating weight.

pub mod aggregator;
pub mod breakdown;
pub mod history;
pub mod memory;
pub mod window;

pub use aggregator::AdherenceAggregator;
pub use breakdown::{StrengthBreakdown, WeightSource};
pub use history::CheckInHistory;
pub use memory::InMemoryRecords;
pub use window::AdherenceWindow;
