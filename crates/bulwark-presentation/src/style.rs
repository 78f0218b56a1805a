use serde::{Deserialize, Serialize};

use crate::tier::DefenseTier;

/// Everything the dashboard needs to paint one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub tier: DefenseTier,
    pub fill: String,
    pub border: String,
    /// Full for direct coverage, dimmed for cascaded.
    pub opacity: f64,
}

impl NodeStyle {
    pub fn new(tier: DefenseTier, opacity: f64) -> Self {
        Self {
            tier,
            fill: tier.fill().to_string(),
            border: tier.border().to_string(),
            opacity,
        }
    }
}
