use bulwark_core::config::ObservabilityConfig;
use bulwark_observability::tracing_setup::spans::names;
use bulwark_observability::{defense_span, graph_build_span, impact_span};

#[test]
fn repeated_initialization_is_harmless() {
    bulwark_observability::init_tracing_with_filter("debug");
    bulwark_observability::init_tracing();
    bulwark_observability::init_from_config(&ObservabilityConfig::default());
}

#[test]
fn span_macros_expand_with_expected_names() {
    bulwark_observability::init_tracing_with_filter("info");

    let span = impact_span!(3usize);
    assert!(!span.is_disabled());
    assert_eq!(span.metadata().unwrap().name(), names::IMPACT);
    let span = defense_span!(10usize);
    assert!(!span.is_disabled());
    assert_eq!(span.metadata().unwrap().name(), names::DEFENSE);
    let span = graph_build_span!(4usize, 5usize);
    assert!(!span.is_disabled());
    assert_eq!(span.metadata().unwrap().name(), names::GRAPH_BUILD);
}
