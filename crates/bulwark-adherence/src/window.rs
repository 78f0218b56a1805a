use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Trailing window of `window_days` calendar days ending on, and including, `as_of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdherenceWindow {
    pub as_of: NaiveDate,
    pub window_days: u32,
}

impl AdherenceWindow {
    pub fn new(as_of: NaiveDate, window_days: u32) -> Self {
        Self { as_of, window_days }
    }

    /// First day in the window. An empty window starts after `as_of`.
    pub fn start(&self) -> NaiveDate {
        match self.window_days {
            0 => self.as_of.succ_opt().unwrap_or(NaiveDate::MAX),
            n => self
                .as_of
                .checked_sub_days(Days::new(u64::from(n - 1)))
                .unwrap_or(NaiveDate::MIN),
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start() && day <= self.as_of
    }

    /// Days in the window, oldest first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.as_of;
        self.start().iter_days().take_while(move |d| *d <= end)
    }
}
