/// Bulwark engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Style class marking a node as an intervention rather than a causal-chain participant.
pub const INTERVENTION_STYLE_CLASS: &str = "intervention";
