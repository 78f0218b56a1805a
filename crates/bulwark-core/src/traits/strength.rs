use std::collections::{BTreeMap, HashMap};

/// Per-intervention strength in [0, 1], as consumed by the defense cascade.
pub trait IStrengthSource: Send + Sync {
    /// Unknown interventions have strength 0.
    fn strength(&self, intervention_id: &str) -> f64;
}

impl IStrengthSource for HashMap<String, f64> {
    fn strength(&self, intervention_id: &str) -> f64 {
        self.get(intervention_id).copied().unwrap_or(0.0)
    }
}

impl IStrengthSource for BTreeMap<String, f64> {
    fn strength(&self, intervention_id: &str) -> f64 {
        self.get(intervention_id).copied().unwrap_or(0.0)
    }
}
