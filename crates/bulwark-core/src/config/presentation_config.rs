use serde::{Deserialize, Serialize};

use super::{check_unit_weight, defaults};
use crate::errors::ConfigError;

/// Score thresholds for the discrete visual tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Scores at or above this are "defended".
    pub defended_threshold: f64,
    /// Scores at or above this (and below `defended_threshold`) are "partial".
    pub partial_threshold: f64,
    pub direct_opacity: f64,
    pub indirect_opacity: f64,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            defended_threshold: defaults::DEFAULT_DEFENDED_THRESHOLD,
            partial_threshold: defaults::DEFAULT_PARTIAL_THRESHOLD,
            direct_opacity: defaults::DEFAULT_DIRECT_OPACITY,
            indirect_opacity: defaults::DEFAULT_INDIRECT_OPACITY,
        }
    }
}

impl PresentationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit_weight("defended_threshold", self.defended_threshold)?;
        check_unit_weight("partial_threshold", self.partial_threshold)?;
        check_unit_weight("direct_opacity", self.direct_opacity)?;
        check_unit_weight("indirect_opacity", self.indirect_opacity)?;
        if self.partial_threshold > self.defended_threshold {
            return Err(ConfigError::PresentationThresholdsInverted {
                partial: self.partial_threshold,
                defended: self.defended_threshold,
            });
        }
        Ok(())
    }
}
