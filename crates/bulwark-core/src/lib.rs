//! # bulwark-core
//!
//! Foundation crate for the Bulwark defense-scoring engine.
//! Defines the causal graph types, score entities, errors, config, and the
//! traits through which personal records are read.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BulwarkConfig;
pub use errors::{BulwarkError, BulwarkResult};
pub use models::{
    CausalEdge, CausalNode, DefenseResult, EdgeType, Effectiveness, EffectivenessRating,
    HabitClassification, HabitStatus, ImpactResult,
};
