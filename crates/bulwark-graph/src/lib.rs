//! # bulwark-graph
//!
//! Read-only causal graph. Holds every node and typed edge in a `petgraph`
//! `DiGraph`, plus the filtered forward adjacency that scoring walks:
//! `feedback` and `protective` edges are dropped, as is any edge leaving an
//! intervention node. Also derives the intervention catalog.

pub mod catalog;
pub mod cycles;
pub mod document;
pub mod filter;
pub mod model;

pub use catalog::{InterventionCatalog, InterventionCatalogEntry};
pub use document::GraphDocument;
pub use model::{CausalGraph, EdgeWeight};
