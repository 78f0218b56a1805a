//! Read-only views of the personal-records store. The engine never writes records.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::errors::BulwarkResult;
use crate::models::{EffectivenessRating, HabitClassification};

/// Daily check-ins: which interventions were practiced on which calendar day.
pub trait ICheckInSource: Send + Sync {
    /// Practiced intervention ids for every recorded day in `start..=end`.
    /// Days without a record may be omitted.
    fn check_ins_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BulwarkResult<BTreeMap<NaiveDate, Vec<String>>>;
}

/// Effectiveness ratings and habit-experiment outcomes.
pub trait IRatingSource: Send + Sync {
    fn all_ratings(&self) -> BulwarkResult<Vec<EffectivenessRating>>;

    /// Stores without an experiment protocol have no classifications.
    fn habit_classifications(&self) -> BulwarkResult<Vec<HabitClassification>> {
        Ok(Vec::new())
    }
}
