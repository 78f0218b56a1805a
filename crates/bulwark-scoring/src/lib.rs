//! # bulwark-scoring
//!
//! The two scorers over the causal graph:
//!
//! - [`NetworkImpactScorer`]: per intervention, the tier- and hub-weighted
//!   reach of its direct targets, attenuated per hop. Independent of adherence.
//! - [`DefenseCascader`]: per causal node, how well it is defended by the
//!   interventions being practiced, with cascaded contributions attenuated per hop.
//!
//! [`ScoringEngine`] wires both to configuration, adherence and presentation.

pub mod defense;
pub mod engine;
pub mod impact;
pub mod ranking;
pub mod summary;

pub use defense::{CascadeStats, DefenseCascader};
pub use engine::{Evaluation, ScoringEngine};
pub use impact::NetworkImpactScorer;
pub use ranking::{compare_impact, rank_interventions};
pub use summary::DefenseSummary;
