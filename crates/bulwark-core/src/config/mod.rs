pub mod adherence_config;
pub mod defaults;
pub mod observability_config;
pub mod presentation_config;
pub mod scoring_config;

pub use adherence_config::{AdherenceConfig, EffectivenessWeights, HabitStatusWeights};
pub use observability_config::ObservabilityConfig;
pub use presentation_config::PresentationConfig;
pub use scoring_config::{ScoringConfig, TierWeights};

use serde::{Deserialize, Serialize};

use crate::errors::{BulwarkResult, ConfigError};

/// Top-level engine configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulwarkConfig {
    pub scoring: ScoringConfig,
    pub adherence: AdherenceConfig,
    pub presentation: PresentationConfig,
    pub observability: ObservabilityConfig,
}

impl BulwarkConfig {
    /// Parse a TOML document and validate it. Missing keys take defaults.
    pub fn from_toml(s: &str) -> BulwarkResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.adherence.validate()?;
        self.presentation.validate()?;
        Ok(())
    }
}

/// Shared check for weights that must lie in [0, 1].
pub(crate) fn check_unit_weight(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::WeightOutOfRange {
            name: name.to_string(),
            value,
        })
    }
}

/// Shared check for multipliers that may exceed 1 but never go negative.
pub(crate) fn check_multiplier(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeMultiplier {
            name: name.to_string(),
            value,
        })
    }
}
