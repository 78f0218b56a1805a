//! Span definitions per operation: graph build, adherence, impact, defense.

/// Create a graph-build span.
#[macro_export]
macro_rules! graph_build_span {
    ($node_count:expr, $edge_count:expr) => {
        tracing::info_span!(
            "bulwark.graph_build",
            node_count = $node_count,
            edge_count = $edge_count
        )
    };
}

/// Create an adherence aggregation span.
#[macro_export]
macro_rules! adherence_span {
    ($as_of:expr, $window_days:expr) => {
        tracing::info_span!("bulwark.adherence", as_of = %$as_of, window_days = $window_days)
    };
}

/// Create a network-impact span.
#[macro_export]
macro_rules! impact_span {
    ($intervention_count:expr) => {
        tracing::info_span!("bulwark.impact", intervention_count = $intervention_count)
    };
}

/// Create a defense-cascade span.
#[macro_export]
macro_rules! defense_span {
    ($node_count:expr) => {
        tracing::info_span!("bulwark.defense", node_count = $node_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const GRAPH_BUILD: &str = "bulwark.graph_build";
    pub const ADHERENCE: &str = "bulwark.adherence";
    pub const IMPACT: &str = "bulwark.impact";
    pub const DEFENSE: &str = "bulwark.defense";
}
