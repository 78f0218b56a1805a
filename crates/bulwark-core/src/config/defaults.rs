// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_CASCADE_DECAY: f64 = 0.8; // each hop keeps 80% of the inherited effect
pub const DEFAULT_MIN_PROPAGATION_STRENGTH: f64 = 0.01;
pub const DEFAULT_HUB_BONUS_PER_EDGE: f64 = 0.1;

// --- Tiers ---
pub const DEFAULT_HIGH_TIER_MIN: i32 = 8;
pub const DEFAULT_HIGH_TIER_WEIGHT: f64 = 1.5;
pub const DEFAULT_MID_TIER_MIN: i32 = 6;
pub const DEFAULT_MID_TIER_WEIGHT: f64 = 1.2;
pub const DEFAULT_TIER_WEIGHT: f64 = 1.0;

// --- Adherence ---
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

// --- Effectiveness weights ---
pub const DEFAULT_WEIGHT_HIGHLY_EFFECTIVE: f64 = 1.0;
pub const DEFAULT_WEIGHT_EFFECTIVE: f64 = 0.75;
pub const DEFAULT_WEIGHT_MODEST: f64 = 0.4;
pub const DEFAULT_WEIGHT_UNTESTED: f64 = 0.5;
pub const DEFAULT_WEIGHT_DOESNT_WORK: f64 = 0.1;

// --- Habit status weights ---
pub const DEFAULT_WEIGHT_HELPFUL: f64 = 1.0;
pub const DEFAULT_WEIGHT_NEUTRAL: f64 = 0.6;
pub const DEFAULT_WEIGHT_UNKNOWN: f64 = 0.5;
pub const DEFAULT_WEIGHT_HARMFUL: f64 = 0.15;

// --- Presentation ---
pub const DEFAULT_DEFENDED_THRESHOLD: f64 = 0.6;
pub const DEFAULT_PARTIAL_THRESHOLD: f64 = 0.3;
pub const DEFAULT_DIRECT_OPACITY: f64 = 1.0;
pub const DEFAULT_INDIRECT_OPACITY: f64 = 0.7;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
