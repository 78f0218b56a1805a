use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use bulwark_core::config::AdherenceConfig;
use bulwark_core::errors::BulwarkResult;
use bulwark_core::models::{Effectiveness, EffectivenessRating, HabitClassification, HabitStatus};
use bulwark_core::traits::{ICheckInSource, IRatingSource, IStrengthSource};
use bulwark_observability::adherence_span;

use crate::breakdown::{StrengthBreakdown, WeightSource};
use crate::history::CheckInHistory;
use crate::window::AdherenceWindow;

/// Per-intervention strength over a trailing window.
///
/// `strength = weight × days_practiced / window_days`, where the weight comes
/// from the habit classification if one exists, else from the effectiveness
/// rating (unrated means `untested`). Pure once built.
#[derive(Debug, Clone)]
pub struct AdherenceAggregator {
    config: AdherenceConfig,
    window: AdherenceWindow,
    days_practiced: HashMap<String, u32>,
    ratings: HashMap<String, Effectiveness>,
    habits: HashMap<String, HabitStatus>,
}

impl AdherenceAggregator {
    /// Empty aggregator for the window ending on `as_of`. Validates `config`.
    pub fn new(config: AdherenceConfig, as_of: NaiveDate) -> BulwarkResult<Self> {
        config.validate()?;
        let window = AdherenceWindow::new(as_of, config.window_days);
        Ok(Self {
            config,
            window,
            days_practiced: HashMap::new(),
            ratings: HashMap::new(),
            habits: HashMap::new(),
        })
    }

    /// Count practiced days that fall inside the window. Days outside are ignored.
    pub fn with_history(mut self, history: &CheckInHistory) -> Self {
        self.days_practiced.clear();
        for (_, ids) in history.range(self.window.start(), self.window.as_of) {
            for id in ids {
                *self.days_practiced.entry(id.clone()).or_insert(0) += 1;
            }
        }
        self
    }

    /// Later ratings for the same intervention replace earlier ones.
    pub fn with_ratings(mut self, ratings: impl IntoIterator<Item = EffectivenessRating>) -> Self {
        for rating in ratings {
            self.ratings.insert(rating.intervention_id, rating.effectiveness);
        }
        self
    }

    pub fn with_habit_classifications(
        mut self,
        classifications: impl IntoIterator<Item = HabitClassification>,
    ) -> Self {
        for c in classifications {
            self.habits.insert(c.intervention_id, c.status);
        }
        self
    }

    /// Read the window's check-ins, all ratings and habit classifications from
    /// the record stores.
    pub fn load(
        config: AdherenceConfig,
        as_of: NaiveDate,
        check_ins: &dyn ICheckInSource,
        ratings: &dyn IRatingSource,
    ) -> BulwarkResult<Self> {
        let _span = adherence_span!(as_of, config.window_days).entered();

        let aggregator = Self::new(config, as_of)?;
        let days = check_ins.check_ins_between(aggregator.window.start(), as_of)?;
        let history = CheckInHistory::from(days);
        let rating_rows = ratings.all_ratings()?;
        let habit_rows = ratings.habit_classifications()?;

        debug!(
            recorded_days = history.day_count(),
            ratings = rating_rows.len(),
            habits = habit_rows.len(),
            "adherence records loaded"
        );

        Ok(aggregator
            .with_history(&history)
            .with_ratings(rating_rows)
            .with_habit_classifications(habit_rows))
    }

    pub fn window(&self) -> AdherenceWindow {
        self.window
    }

    pub fn config(&self) -> &AdherenceConfig {
        &self.config
    }

    /// Distinct days in the window on which the intervention was practiced.
    pub fn days_practiced(&self, intervention_id: &str) -> u32 {
        self.days_practiced
            .get(intervention_id)
            .copied()
            .unwrap_or(0)
    }

    pub fn weight_source(&self, intervention_id: &str) -> WeightSource {
        match self.habits.get(intervention_id) {
            Some(&status) => WeightSource::HabitStatus(status),
            None => WeightSource::Rating(
                self.ratings
                    .get(intervention_id)
                    .copied()
                    .unwrap_or_default(),
            ),
        }
    }

    pub fn weight(&self, intervention_id: &str) -> f64 {
        match self.weight_source(intervention_id) {
            WeightSource::HabitStatus(status) => self.config.habit_status_weights.weight(status),
            WeightSource::Rating(effectiveness) => {
                self.config.effectiveness_weights.weight(effectiveness)
            }
        }
    }

    /// Strength in [0, 1].
    pub fn strength(&self, intervention_id: &str) -> f64 {
        self.breakdown(intervention_id).strength
    }

    /// Strength with every term of the formula.
    pub fn breakdown(&self, intervention_id: &str) -> StrengthBreakdown {
        let source = self.weight_source(intervention_id);
        let weight = self.weight(intervention_id);
        let days_practiced = self.days_practiced(intervention_id);
        let window_days = self.window.window_days;
        let strength =
            (weight * f64::from(days_practiced) / f64::from(window_days)).clamp(0.0, 1.0);
        StrengthBreakdown {
            intervention_id: intervention_id.to_string(),
            source,
            weight,
            days_practiced,
            window_days,
            strength,
        }
    }

    /// Strengths for every given intervention.
    pub fn strengths<'a>(
        &self,
        intervention_ids: impl IntoIterator<Item = &'a str>,
    ) -> HashMap<String, f64> {
        intervention_ids
            .into_iter()
            .map(|id| (id.to_string(), self.strength(id)))
            .collect()
    }
}

impl IStrengthSource for AdherenceAggregator {
    fn strength(&self, intervention_id: &str) -> f64 {
        AdherenceAggregator::strength(self, intervention_id)
    }
}
