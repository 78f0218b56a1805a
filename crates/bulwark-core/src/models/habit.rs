use serde::{Deserialize, Serialize};

/// Outcome of an on/off habit experiment for one intervention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitStatus {
    Helpful,
    Neutral,
    #[default]
    Unknown,
    Harmful,
}

impl HabitStatus {
    pub const ALL: [HabitStatus; 4] = [Self::Helpful, Self::Neutral, Self::Unknown, Self::Harmful];

    /// Case-insensitive parse. Anything unrecognised is `Unknown`.
    pub fn from_str_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "helpful" => Self::Helpful,
            "neutral" => Self::Neutral,
            "harmful" => Self::Harmful,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Helpful => "helpful",
            Self::Neutral => "neutral",
            Self::Unknown => "unknown",
            Self::Harmful => "harmful",
        }
    }
}

impl std::fmt::Display for HabitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified habit experiment. When present it overrides the effectiveness rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitClassification {
    pub intervention_id: String,
    #[serde(default)]
    pub status: HabitStatus,
    #[serde(default)]
    pub nights_on: u32,
    #[serde(default)]
    pub nights_off: u32,
}

impl HabitClassification {
    pub fn new(intervention_id: impl Into<String>, status: HabitStatus) -> Self {
        Self {
            intervention_id: intervention_id.into(),
            status,
            nights_on: 0,
            nights_off: 0,
        }
    }
}
