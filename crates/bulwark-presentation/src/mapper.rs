use bulwark_core::config::PresentationConfig;
use bulwark_core::errors::BulwarkResult;
use bulwark_core::models::DefenseResult;

use crate::style::NodeStyle;
use crate::tier::DefenseTier;

/// Configurable score → style mapping.
#[derive(Debug, Clone, Default)]
pub struct PresentationMapper {
    config: PresentationConfig,
}

impl PresentationMapper {
    pub fn new(config: PresentationConfig) -> BulwarkResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    /// Thresholds are inclusive at the lower bound of each band.
    pub fn tier(&self, score: f64) -> DefenseTier {
        if score >= self.config.defended_threshold {
            DefenseTier::Defended
        } else if score >= self.config.partial_threshold {
            DefenseTier::Partial
        } else {
            DefenseTier::Undefended
        }
    }

    pub fn opacity(&self, is_direct: bool) -> f64 {
        if is_direct {
            self.config.direct_opacity
        } else {
            self.config.indirect_opacity
        }
    }

    pub fn color(&self, score: f64, is_direct: bool) -> NodeStyle {
        NodeStyle::new(self.tier(score), self.opacity(is_direct))
    }

    pub fn style(&self, result: &DefenseResult) -> NodeStyle {
        self.color(result.score, result.is_direct)
    }

    pub fn label(&self, score: f64) -> String {
        score_to_label(score)
    }
}

/// Style for a score under the default thresholds.
pub fn score_to_color(score: f64, is_direct: bool) -> NodeStyle {
    PresentationMapper::default().color(score, is_direct)
}

/// `round(score × 100)` as an integer percentage, e.g. `"70%"`.
pub fn score_to_label(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}
