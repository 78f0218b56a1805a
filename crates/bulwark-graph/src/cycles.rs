//! Cycle diagnostics over the forward adjacency using Tarjan's SCC.
//! Cycles are legal; scoring terminates on them. This is for reporting only.

use petgraph::algo::tarjan_scc;
use petgraph::graph::DiGraph;

use crate::model::CausalGraph;

/// Strongly connected components of the propagation adjacency that form a cycle
/// (more than one node, or a self-loop). Ids are sorted within each component
/// and components are sorted by their first id.
pub fn forward_cycles(graph: &CausalGraph) -> Vec<Vec<String>> {
    let mut forward: DiGraph<(), ()> =
        DiGraph::with_capacity(graph.node_count(), graph.forward_edge_count());
    for _ in graph.node_indices() {
        forward.add_node(());
    }
    for idx in graph.node_indices() {
        for &child in graph.forward_neighbors(idx) {
            forward.add_edge(idx, child, ());
        }
    }

    let mut cycles: Vec<Vec<String>> = tarjan_scc(&forward)
        .into_iter()
        .filter(|scc| scc.len() > 1 || forward.contains_edge(scc[0], scc[0]))
        .map(|scc| {
            let mut ids: Vec<String> = scc
                .into_iter()
                .map(|idx| graph.id_at(idx).to_string())
                .collect();
            ids.sort();
            ids
        })
        .collect();
    cycles.sort();
    cycles
}

/// Whether the forward adjacency contains any cycle.
pub fn has_forward_cycle(graph: &CausalGraph) -> bool {
    !forward_cycles(graph).is_empty()
}
