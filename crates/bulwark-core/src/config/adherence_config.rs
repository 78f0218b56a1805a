use serde::{Deserialize, Serialize};

use super::{check_unit_weight, defaults};
use crate::errors::ConfigError;
use crate::models::{Effectiveness, HabitStatus};

/// Numeric weight per effectiveness category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectivenessWeights {
    pub highly_effective: f64,
    pub effective: f64,
    pub modest: f64,
    pub untested: f64,
    pub doesnt_work: f64,
}

impl Default for EffectivenessWeights {
    fn default() -> Self {
        Self {
            highly_effective: defaults::DEFAULT_WEIGHT_HIGHLY_EFFECTIVE,
            effective: defaults::DEFAULT_WEIGHT_EFFECTIVE,
            modest: defaults::DEFAULT_WEIGHT_MODEST,
            untested: defaults::DEFAULT_WEIGHT_UNTESTED,
            doesnt_work: defaults::DEFAULT_WEIGHT_DOESNT_WORK,
        }
    }
}

impl EffectivenessWeights {
    pub fn weight(&self, effectiveness: Effectiveness) -> f64 {
        match effectiveness {
            Effectiveness::HighlyEffective => self.highly_effective,
            Effectiveness::Effective => self.effective,
            Effectiveness::Modest => self.modest,
            Effectiveness::Untested => self.untested,
            Effectiveness::DoesntWork => self.doesnt_work,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for e in Effectiveness::ALL {
            check_unit_weight(e.as_str(), self.weight(e))?;
        }
        Ok(())
    }
}

/// Numeric weight per habit-experiment outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitStatusWeights {
    pub helpful: f64,
    pub neutral: f64,
    pub unknown: f64,
    pub harmful: f64,
}

impl Default for HabitStatusWeights {
    fn default() -> Self {
        Self {
            helpful: defaults::DEFAULT_WEIGHT_HELPFUL,
            neutral: defaults::DEFAULT_WEIGHT_NEUTRAL,
            unknown: defaults::DEFAULT_WEIGHT_UNKNOWN,
            harmful: defaults::DEFAULT_WEIGHT_HARMFUL,
        }
    }
}

impl HabitStatusWeights {
    pub fn weight(&self, status: HabitStatus) -> f64 {
        match status {
            HabitStatus::Helpful => self.helpful,
            HabitStatus::Neutral => self.neutral,
            HabitStatus::Unknown => self.unknown,
            HabitStatus::Harmful => self.harmful,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for s in HabitStatus::ALL {
            check_unit_weight(s.as_str(), self.weight(s))?;
        }
        Ok(())
    }
}

/// Adherence aggregation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdherenceConfig {
    /// Trailing window length in days, ending on (and including) the as-of date.
    pub window_days: u32,
    pub effectiveness_weights: EffectivenessWeights,
    pub habit_status_weights: HabitStatusWeights,
}

impl Default for AdherenceConfig {
    fn default() -> Self {
        Self {
            window_days: defaults::DEFAULT_WINDOW_DAYS,
            effectiveness_weights: EffectivenessWeights::default(),
            habit_status_weights: HabitStatusWeights::default(),
        }
    }
}

impl AdherenceConfig {
    /// Default weights with a custom window.
    pub fn with_window(window_days: u32) -> Self {
        Self {
            window_days,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_days == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        self.effectiveness_weights.validate()?;
        self.habit_status_weights.validate()
    }
}
