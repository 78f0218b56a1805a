use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use bulwark_core::errors::{BulwarkError, BulwarkResult};

/// Day key format used by the record stores.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Which interventions were practiced on which day.
///
/// Repeated ids within a day count once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckInHistory {
    days: BTreeMap<NaiveDate, BTreeSet<String>>,
}

impl CheckInHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `intervention_id` as practiced on `day`.
    pub fn record(&mut self, day: NaiveDate, intervention_id: impl Into<String>) {
        self.days
            .entry(day)
            .or_default()
            .insert(intervention_id.into());
    }

    /// Build from already-parsed days.
    pub fn from_days<I, S>(days: impl IntoIterator<Item = (NaiveDate, I)>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut history = Self::new();
        for (day, ids) in days {
            for id in ids {
                history.record(day, id);
            }
        }
        history
    }

    /// Build from `YYYY-MM-DD` day keys as stored by the dashboard.
    pub fn from_day_keys<K, I, S>(days: impl IntoIterator<Item = (K, I)>) -> BulwarkResult<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut history = Self::new();
        for (key, ids) in days {
            let key = key.as_ref();
            let day = NaiveDate::parse_from_str(key, DAY_KEY_FORMAT).map_err(|e| {
                BulwarkError::RecordSource {
                    store: "check_ins".to_string(),
                    message: format!("bad day key {key:?}: {e}"),
                }
            })?;
            for id in ids {
                history.record(day, id);
            }
        }
        Ok(history)
    }

    /// Practiced ids on `day`, if anything was recorded.
    pub fn practiced_on(&self, day: NaiveDate) -> Option<&BTreeSet<String>> {
        self.days.get(&day)
    }

    /// Recorded days in `start..=end`, oldest first. Empty when `start > end`.
    pub fn range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = (NaiveDate, &BTreeSet<String>)> + '_ {
        (start <= end)
            .then(|| self.days.range(start..=end))
            .into_iter()
            .flatten()
            .map(|(day, ids)| (*day, ids))
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl From<BTreeMap<NaiveDate, Vec<String>>> for CheckInHistory {
    fn from(days: BTreeMap<NaiveDate, Vec<String>>) -> Self {
        Self::from_days(days)
    }
}
