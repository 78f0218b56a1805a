use serde::{Deserialize, Serialize};

/// Downstream influence of one intervention on the causal network.
///
/// `score` is a relative ranking metric and is unbounded above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactResult {
    pub intervention_id: String,
    pub score: f64,
    pub reachable_count: usize,
}

/// How well one causal node is defended by the interventions being practiced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefenseResult {
    pub node_id: String,
    /// In [0.0, 1.0].
    pub score: f64,
    /// True when at least one intervention targets the node directly.
    pub is_direct: bool,
}

impl DefenseResult {
    /// An undefended, non-direct node.
    pub fn undefended(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            score: 0.0,
            is_direct: false,
        }
    }
}
