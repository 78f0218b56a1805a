use serde::{Deserialize, Serialize};

use crate::constants::INTERVENTION_STYLE_CLASS;

/// A factor, mechanism, symptom, or intervention in the condition's cause-effect graph.
///
/// Nodes are immutable reference data owned by the graph model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CausalNode {
    /// Unique node identifier.
    pub id: String,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Category, e.g. "symptom", "mechanism", "intervention".
    #[serde(default)]
    pub style_class: String,
    /// Proxy for causal proximity to the symptom of interest. Higher is closer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<i32>,
}

impl CausalNode {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        style_class: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            style_class: style_class.into(),
            tier: None,
        }
    }

    /// Builder-style tier assignment.
    pub fn with_tier(mut self, tier: i32) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Interventions are leaves of the causal chain, never participants in it.
    pub fn is_intervention(&self) -> bool {
        self.style_class == INTERVENTION_STYLE_CLASS
    }
}
