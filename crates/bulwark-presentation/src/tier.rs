use serde::{Deserialize, Serialize};

/// Discrete visual band for a defense score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefenseTier {
    Defended,
    Partial,
    Undefended,
}

impl DefenseTier {
    /// Best-defended first.
    pub const ALL: [DefenseTier; 3] = [Self::Defended, Self::Partial, Self::Undefended];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Defended => "defended",
            Self::Partial => "partial",
            Self::Undefended => "undefended",
        }
    }

    pub fn fill(&self) -> &'static str {
        match self {
            Self::Defended => "#22c55e",
            Self::Partial => "#f59e0b",
            Self::Undefended => "#ef4444",
        }
    }

    pub fn border(&self) -> &'static str {
        match self {
            Self::Defended => "#16a34a",
            Self::Partial => "#d97706",
            Self::Undefended => "#dc2626",
        }
    }
}

impl std::fmt::Display for DefenseTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
