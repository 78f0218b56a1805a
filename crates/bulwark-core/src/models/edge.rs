use serde::{Deserialize, Serialize};

/// Closed set of edge tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// X drives Y. Legacy documents spell this "forward" or "dashed".
    #[default]
    #[serde(alias = "forward", alias = "dashed")]
    Causal,
    /// Y loops back into X. Present to represent cycles; never propagated.
    Feedback,
    /// X protects against Y. Never propagated.
    Protective,
    /// An intervention acting on its target.
    Intervention,
}

impl EdgeType {
    /// All variants for iteration.
    pub const ALL: [EdgeType; 4] = [
        Self::Causal,
        Self::Feedback,
        Self::Protective,
        Self::Intervention,
    ];

    /// Whether defense and impact may travel along this edge type.
    pub fn propagates(&self) -> bool {
        !matches!(self, Self::Feedback | Self::Protective)
    }

    /// Parse from string (matching the serde rename and its aliases).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "causal" | "forward" | "dashed" => Some(Self::Causal),
            "feedback" => Some(Self::Feedback),
            "protective" => Some(Self::Protective),
            "intervention" => Some(Self::Intervention),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Causal => "causal",
            Self::Feedback => "feedback",
            Self::Protective => "protective",
            Self::Intervention => "intervention",
        }
    }
}

impl std::fmt::Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed, typed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CausalEdge {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub edge_type: EdgeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl CausalEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, edge_type: EdgeType) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            edge_type,
            label: None,
        }
    }

    /// Shorthand for a `causal` edge.
    pub fn causal(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(source, target, EdgeType::Causal)
    }
}
