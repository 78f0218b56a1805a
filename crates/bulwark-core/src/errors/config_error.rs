/// Configuration rejected at construction time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("cascade decay must lie in (0, 1), got {value}")]
    CascadeDecayOutOfRange { value: f64 },

    #[error("propagation cutoff must lie in (0, 1), got {value}")]
    CutoffOutOfRange { value: f64 },

    #[error("adherence window must be at least one day")]
    EmptyWindow,

    #[error("weight {name} must lie in [0, 1], got {value}")]
    WeightOutOfRange { name: String, value: f64 },

    #[error("{name} must be finite and non-negative, got {value}")]
    NegativeMultiplier { name: String, value: f64 },

    #[error("tier thresholds inverted: mid tier {mid} is above high tier {high}")]
    TierThresholdsInverted { mid: i32, high: i32 },

    #[error("presentation thresholds inverted: partial {partial} is above defended {defended}")]
    PresentationThresholdsInverted { partial: f64, defended: f64 },

    #[error("failed to parse config: {reason}")]
    Parse { reason: String },
}
