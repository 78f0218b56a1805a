use serde::{Deserialize, Serialize};

use bulwark_core::models::{Effectiveness, HabitStatus};

/// Where an intervention's weight came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum WeightSource {
    /// Effectiveness rating; unrated interventions report `Untested`.
    Rating(Effectiveness),
    /// Habit-experiment classification, which overrides the rating.
    HabitStatus(HabitStatus),
}

/// Every term of the strength formula for one intervention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthBreakdown {
    pub intervention_id: String,
    pub source: WeightSource,
    pub weight: f64,
    pub days_practiced: u32,
    pub window_days: u32,
    pub strength: f64,
}

impl StrengthBreakdown {
    /// Fraction of the window on which the intervention was practiced.
    pub fn adherence(&self) -> f64 {
        if self.window_days == 0 {
            return 0.0;
        }
        f64::from(self.days_practiced) / f64::from(self.window_days)
    }
}
