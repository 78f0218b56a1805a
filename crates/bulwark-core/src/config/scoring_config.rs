use serde::{Deserialize, Serialize};

use super::{check_multiplier, defaults};
use crate::errors::ConfigError;

/// Tier thresholds and the weight each band contributes to impact scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierWeights {
    /// Tiers at or above this get `high_tier_weight`.
    pub high_tier_min: i32,
    pub high_tier_weight: f64,
    /// Tiers in `[mid_tier_min, high_tier_min)` get `mid_tier_weight`.
    pub mid_tier_min: i32,
    pub mid_tier_weight: f64,
    /// Everything else, including untiered nodes.
    pub default_weight: f64,
}

impl Default for TierWeights {
    fn default() -> Self {
        Self {
            high_tier_min: defaults::DEFAULT_HIGH_TIER_MIN,
            high_tier_weight: defaults::DEFAULT_HIGH_TIER_WEIGHT,
            mid_tier_min: defaults::DEFAULT_MID_TIER_MIN,
            mid_tier_weight: defaults::DEFAULT_MID_TIER_WEIGHT,
            default_weight: defaults::DEFAULT_TIER_WEIGHT,
        }
    }
}

impl TierWeights {
    /// Weight for a node's tier. Nodes closer to the symptom matter more.
    pub fn weight(&self, tier: Option<i32>) -> f64 {
        match tier {
            Some(t) if t >= self.high_tier_min => self.high_tier_weight,
            Some(t) if t >= self.mid_tier_min => self.mid_tier_weight,
            _ => self.default_weight,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mid_tier_min > self.high_tier_min {
            return Err(ConfigError::TierThresholdsInverted {
                mid: self.mid_tier_min,
                high: self.high_tier_min,
            });
        }
        check_multiplier("tiers.high_tier_weight", self.high_tier_weight)?;
        check_multiplier("tiers.mid_tier_weight", self.mid_tier_weight)?;
        check_multiplier("tiers.default_weight", self.default_weight)?;
        Ok(())
    }
}

/// Propagation parameters shared by the impact scorer and the defense cascader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Fraction of an effect that survives each hop, in (0, 1).
    pub cascade_decay: f64,
    /// Contributions below this are pruned, in (0, 1).
    pub min_propagation_strength: f64,
    /// Per-out-edge bonus in `1 + bonus * out_degree`.
    pub hub_bonus_per_edge: f64,
    pub tiers: TierWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            cascade_decay: defaults::DEFAULT_CASCADE_DECAY,
            min_propagation_strength: defaults::DEFAULT_MIN_PROPAGATION_STRENGTH,
            hub_bonus_per_edge: defaults::DEFAULT_HUB_BONUS_PER_EDGE,
            tiers: TierWeights::default(),
        }
    }
}

impl ScoringConfig {
    /// Default config with a different decay.
    pub fn with_decay(cascade_decay: f64) -> Self {
        Self {
            cascade_decay,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cascade_decay > 0.0 && self.cascade_decay < 1.0) {
            return Err(ConfigError::CascadeDecayOutOfRange {
                value: self.cascade_decay,
            });
        }
        if !(self.min_propagation_strength > 0.0 && self.min_propagation_strength < 1.0) {
            return Err(ConfigError::CutoffOutOfRange {
                value: self.min_propagation_strength,
            });
        }
        check_multiplier("hub_bonus_per_edge", self.hub_bonus_per_edge)?;
        self.tiers.validate()
    }
}
