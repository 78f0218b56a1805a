//! The dashboard's graph document: `{ nodes: [{ data }], edges: [{ data }] }`.

use serde::{Deserialize, Serialize};

use bulwark_core::errors::{BulwarkResult, GraphError};
use bulwark_core::models::{CausalEdge, CausalNode};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeEnvelope {
    pub data: CausalNode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeEnvelope {
    pub data: CausalEdge,
}

/// Serialized causal graph as exchanged with the presentation layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<NodeEnvelope>,
    #[serde(default)]
    pub edges: Vec<EdgeEnvelope>,
}

impl GraphDocument {
    /// Parse a JSON document. Structure is validated later, by `CausalGraph`.
    pub fn from_json(s: &str) -> BulwarkResult<Self> {
        serde_json::from_str(s).map_err(|e| {
            GraphError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Build a document from bare nodes and edges.
    pub fn from_parts(nodes: Vec<CausalNode>, edges: Vec<CausalEdge>) -> Self {
        Self {
            nodes: nodes.into_iter().map(|data| NodeEnvelope { data }).collect(),
            edges: edges.into_iter().map(|data| EdgeEnvelope { data }).collect(),
        }
    }

    /// Split back into bare nodes and edges, preserving order.
    pub fn into_parts(self) -> (Vec<CausalNode>, Vec<CausalEdge>) {
        (
            self.nodes.into_iter().map(|n| n.data).collect(),
            self.edges.into_iter().map(|e| e.data).collect(),
        )
    }
}
