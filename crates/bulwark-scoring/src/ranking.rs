use std::cmp::Ordering;
use std::collections::HashMap;

use bulwark_core::models::ImpactResult;

/// Score descending, then reachable count descending, then id ascending.
pub fn compare_impact(a: &ImpactResult, b: &ImpactResult) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.reachable_count.cmp(&a.reachable_count))
        .then_with(|| a.intervention_id.cmp(&b.intervention_id))
}

/// Impact results in presentation order. Stable across calls for equal inputs.
pub fn rank_interventions(results: &HashMap<String, ImpactResult>) -> Vec<ImpactResult> {
    let mut ranked: Vec<ImpactResult> = results.values().cloned().collect();
    ranked.sort_by(compare_impact);
    ranked
}
