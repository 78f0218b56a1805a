//! Edge filter predicate for the propagation adjacency.

use bulwark_core::models::{CausalNode, EdgeType};

/// Whether an edge of `edge_type` leaving `source` takes part in forward propagation.
///
/// Interventions are leaves of the causal chain, so their outgoing edges never
/// propagate; neither do `feedback` or `protective` edges.
pub fn is_propagating(edge_type: EdgeType, source: &CausalNode) -> bool {
    edge_type.propagates() && !source.is_intervention()
}
