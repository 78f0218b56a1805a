//! In-memory record store, for embedding callers and tests.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use bulwark_core::errors::BulwarkResult;
use bulwark_core::models::{EffectivenessRating, HabitClassification};
use bulwark_core::traits::{ICheckInSource, IRatingSource};

use crate::history::CheckInHistory;

#[derive(Debug, Clone, Default)]
pub struct InMemoryRecords {
    pub history: CheckInHistory,
    pub ratings: Vec<EffectivenessRating>,
    pub habits: Vec<HabitClassification>,
}

impl InMemoryRecords {
    pub fn new(
        history: CheckInHistory,
        ratings: Vec<EffectivenessRating>,
        habits: Vec<HabitClassification>,
    ) -> Self {
        Self {
            history,
            ratings,
            habits,
        }
    }
}

impl ICheckInSource for InMemoryRecords {
    fn check_ins_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BulwarkResult<BTreeMap<NaiveDate, Vec<String>>> {
        Ok(self
            .history
            .range(start, end)
            .map(|(day, ids)| (day, ids.iter().cloned().collect()))
            .collect())
    }
}

impl IRatingSource for InMemoryRecords {
    fn all_ratings(&self) -> BulwarkResult<Vec<EffectivenessRating>> {
        Ok(self.ratings.clone())
    }

    fn habit_classifications(&self) -> BulwarkResult<Vec<HabitClassification>> {
        Ok(self.habits.clone())
    }
}
