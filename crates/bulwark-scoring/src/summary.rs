use serde::Serialize;

use bulwark_core::models::DefenseResult;
use bulwark_presentation::{DefenseTier, PresentationMapper};

/// Dashboard header numbers for one defense pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefenseSummary {
    pub node_count: usize,
    pub defended: usize,
    pub partial: usize,
    pub undefended: usize,
    pub direct: usize,
    /// 0 when there are no nodes.
    pub mean_score: f64,
}

impl DefenseSummary {
    pub fn from_results<'a>(
        results: impl IntoIterator<Item = &'a DefenseResult>,
        mapper: &PresentationMapper,
    ) -> Self {
        let mut summary = Self::default();
        let mut total = 0.0;
        for result in results {
            summary.node_count += 1;
            total += result.score;
            if result.is_direct {
                summary.direct += 1;
            }
            match mapper.tier(result.score) {
                DefenseTier::Defended => summary.defended += 1,
                DefenseTier::Partial => summary.partial += 1,
                DefenseTier::Undefended => summary.undefended += 1,
            }
        }
        if summary.node_count > 0 {
            summary.mean_score = total / summary.node_count as f64;
        }
        summary
    }

    pub fn count(&self, tier: DefenseTier) -> usize {
        match tier {
            DefenseTier::Defended => self.defended,
            DefenseTier::Partial => self.partial,
            DefenseTier::Undefended => self.undefended,
        }
    }
}
