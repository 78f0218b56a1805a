//! `petgraph::DiGraph` wrapper with O(1) id lookup and the filtered forward adjacency.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::debug;

use bulwark_core::errors::{BulwarkResult, GraphError};
use bulwark_core::models::{CausalEdge, CausalNode, EdgeType};
use bulwark_observability::graph_build_span;

use crate::cycles;
use crate::document::GraphDocument;
use crate::filter;

/// Weight on a stored edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeWeight {
    pub edge_type: EdgeType,
    pub label: Option<String>,
}

/// The underlying directed graph type. Holds every edge, whatever its tag.
pub type CausalDiGraph = DiGraph<CausalNode, EdgeWeight>;

/// Immutable causal graph.
///
/// Node indices follow document order and edges keep insertion order, both in
/// the full graph and in the forward adjacency.
#[derive(Debug, Clone)]
pub struct CausalGraph {
    graph: CausalDiGraph,
    node_index: HashMap<String, NodeIndex>,
    /// `forward[i]` lists the propagation children of node `i`, in edge order.
    forward: Vec<Vec<NodeIndex>>,
}

impl CausalGraph {
    /// Build the graph in one pass over nodes and edges.
    ///
    /// Fails if a node id repeats or an edge references an unknown node.
    pub fn new(nodes: Vec<CausalNode>, edges: Vec<CausalEdge>) -> BulwarkResult<Self> {
        let _span = graph_build_span!(nodes.len(), edges.len()).entered();

        let mut graph = CausalDiGraph::with_capacity(nodes.len(), edges.len());
        let mut node_index = HashMap::with_capacity(nodes.len());

        for node in nodes {
            if node_index.contains_key(&node.id) {
                return Err(GraphError::DuplicateNode { id: node.id }.into());
            }
            let id = node.id.clone();
            let idx = graph.add_node(node);
            node_index.insert(id, idx);
        }

        let mut forward = vec![Vec::new(); graph.node_count()];
        for edge in edges {
            let Some(&src) = node_index.get(&edge.source) else {
                return Err(GraphError::UnknownSource {
                    source_id: edge.source,
                    target_id: edge.target,
                }
                .into());
            };
            let Some(&tgt) = node_index.get(&edge.target) else {
                return Err(GraphError::UnknownTarget {
                    source_id: edge.source,
                    target_id: edge.target,
                }
                .into());
            };

            if filter::is_propagating(edge.edge_type, &graph[src]) {
                forward[src.index()].push(tgt);
            }
            graph.add_edge(
                src,
                tgt,
                EdgeWeight {
                    edge_type: edge.edge_type,
                    label: edge.label,
                },
            );
        }

        let built = Self {
            graph,
            node_index,
            forward,
        };
        debug!(
            nodes = built.node_count(),
            edges = built.edge_count(),
            forward_edges = built.forward_edge_count(),
            "causal graph built"
        );
        let loops = built.forward_cycles();
        if !loops.is_empty() {
            debug!(count = loops.len(), ?loops, "forward adjacency contains cycles");
        }
        Ok(built)
    }

    /// Build from a parsed graph document.
    pub fn from_document(document: GraphDocument) -> BulwarkResult<Self> {
        let (nodes, edges) = document.into_parts();
        Self::new(nodes, edges)
    }

    /// Parse and build from the dashboard's JSON document.
    pub fn from_json(s: &str) -> BulwarkResult<Self> {
        Self::from_document(GraphDocument::from_json(s)?)
    }

    // --- Lookup by id ---

    /// Look up a node index by id.
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&CausalNode> {
        self.index_of(id).map(|idx| &self.graph[idx])
    }

    /// Forward out-neighbors of `id`, in edge insertion order. Unknown ids have none.
    pub fn out_neighbors(&self, id: &str) -> Vec<&str> {
        self.index_of(id)
            .map(|idx| {
                self.forward_neighbors(idx)
                    .iter()
                    .map(|&child| self.id_at(child))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn tier(&self, id: &str) -> Option<i32> {
        self.node(id).and_then(|n| n.tier)
    }

    pub fn is_intervention(&self, id: &str) -> bool {
        self.node(id).is_some_and(CausalNode::is_intervention)
    }

    // --- Lookup by index (hot paths) ---

    pub fn node_at(&self, idx: NodeIndex) -> &CausalNode {
        &self.graph[idx]
    }

    pub fn id_at(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].id
    }

    pub fn forward_neighbors(&self, idx: NodeIndex) -> &[NodeIndex] {
        self.forward
            .get(idx.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Out-degree in the filtered forward adjacency.
    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.forward_neighbors(idx).len()
    }

    // --- Iteration ---

    /// Node indices in document order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Nodes in document order.
    pub fn nodes(&self) -> impl Iterator<Item = &CausalNode> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Every stored edge as `(source id, target id, weight)`, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &EdgeWeight)> + '_ {
        self.graph
            .edge_references()
            .map(move |e| (self.id_at(e.source()), self.id_at(e.target()), e.weight()))
    }

    /// Intervention nodes in document order.
    pub fn interventions(&self) -> impl Iterator<Item = &CausalNode> + '_ {
        self.nodes().filter(|n| n.is_intervention())
    }

    // --- Counts ---

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn forward_edge_count(&self) -> usize {
        self.forward.iter().map(Vec::len).sum()
    }

    /// Cyclic components of the forward adjacency. See [`cycles::forward_cycles`].
    pub fn forward_cycles(&self) -> Vec<Vec<String>> {
        cycles::forward_cycles(self)
    }
}
