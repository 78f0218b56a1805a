use serde::{Deserialize, Serialize};

/// User-reported effectiveness of an intervention, ordered by confidence.
///
/// Numeric weights live in `EffectivenessWeights` so they can be injected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effectiveness {
    HighlyEffective,
    Effective,
    Modest,
    /// Unrated interventions land here.
    #[default]
    Untested,
    #[serde(alias = "ineffective")]
    DoesntWork,
}

impl Effectiveness {
    /// All variants, most confident first.
    pub const ALL: [Effectiveness; 5] = [
        Self::HighlyEffective,
        Self::Effective,
        Self::Modest,
        Self::Untested,
        Self::DoesntWork,
    ];

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "highly_effective" => Some(Self::HighlyEffective),
            "effective" => Some(Self::Effective),
            "modest" => Some(Self::Modest),
            "untested" => Some(Self::Untested),
            "doesnt_work" | "ineffective" => Some(Self::DoesntWork),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighlyEffective => "highly_effective",
            Self::Effective => "effective",
            Self::Modest => "modest",
            Self::Untested => "untested",
            Self::DoesntWork => "doesnt_work",
        }
    }
}

impl std::fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rating record as stored by the personal-records collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectivenessRating {
    pub intervention_id: String,
    pub effectiveness: Effectiveness,
}

impl EffectivenessRating {
    pub fn new(intervention_id: impl Into<String>, effectiveness: Effectiveness) -> Self {
        Self {
            intervention_id: intervention_id.into(),
            effectiveness,
        }
    }
}
