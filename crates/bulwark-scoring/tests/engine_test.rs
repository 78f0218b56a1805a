use std::collections::HashMap;

use chrono::NaiveDate;

use bulwark_adherence::{CheckInHistory, InMemoryRecords};
use bulwark_core::errors::{BulwarkError, ConfigError};
use bulwark_core::models::{CausalEdge, CausalNode, EdgeType, Effectiveness, EffectivenessRating};
use bulwark_graph::{CausalGraph, InterventionCatalog};
use bulwark_presentation::DefenseTier;
use bulwark_scoring::ScoringEngine;

fn sample() -> (CausalGraph, InterventionCatalog) {
    let graph = CausalGraph::new(
        vec![
            CausalNode::new("PPI_TX", "PPI", "intervention"),
            CausalNode::new("CPAP_TX", "CPAP", "intervention"),
            CausalNode::new("REFLUX", "Reflux", "mechanism").with_tier(3),
            CausalNode::new("APNEA", "Apnea", "mechanism").with_tier(2),
            CausalNode::new("AROUSAL", "Arousal", "mechanism").with_tier(6),
            CausalNode::new("GRINDING", "Grinding", "symptom").with_tier(9),
        ],
        vec![
            CausalEdge::new("PPI_TX", "REFLUX", EdgeType::Intervention),
            CausalEdge::new("CPAP_TX", "APNEA", EdgeType::Intervention),
            CausalEdge::causal("REFLUX", "AROUSAL"),
            CausalEdge::causal("APNEA", "AROUSAL"),
            CausalEdge::causal("AROUSAL", "GRINDING"),
            CausalEdge::new("GRINDING", "AROUSAL", EdgeType::Feedback),
        ],
    )
    .unwrap();
    let catalog = InterventionCatalog::from_graph(&graph);
    (graph, catalog)
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

#[test]
fn evaluate_matches_individual_passes() {
    let (graph, catalog) = sample();
    let engine = ScoringEngine::default();
    let strengths: HashMap<String, f64> =
        [("PPI_TX".to_string(), 0.6), ("CPAP_TX".to_string(), 0.3)].into_iter().collect();

    let eval = engine.evaluate(&graph, &catalog, &strengths);
    assert_eq!(eval.impact, engine.impact(&graph, &catalog));
    assert_eq!(eval.ranking, engine.ranked_impact(&graph, &catalog));
    assert_eq!(eval.defense, engine.defense(&graph, &catalog, &strengths));
    assert_eq!(eval.summary.node_count, 4);
    assert_eq!(eval.summary.direct, 2);
}

#[test]
fn summary_counts_each_tier() {
    let (graph, catalog) = sample();
    let engine = ScoringEngine::default();
    let strengths: HashMap<String, f64> =
        [("PPI_TX".to_string(), 0.6), ("CPAP_TX".to_string(), 0.3)].into_iter().collect();

    let eval = engine.evaluate(&graph, &catalog, &strengths);
    // REFLUX 0.6, AROUSAL 0.72 defended; APNEA 0.3, GRINDING 0.384 partial.
    assert_eq!(eval.summary.count(DefenseTier::Defended), 2);
    assert_eq!(eval.summary.count(DefenseTier::Partial), 2);
    assert_eq!(eval.summary.count(DefenseTier::Undefended), 0);
    for tier in DefenseTier::ALL {
        let expected = eval
            .defense
            .values()
            .filter(|r| engine.mapper().tier(r.score) == tier)
            .count();
        assert_eq!(eval.summary.count(tier), expected, "tier {}", tier.as_str());
    }
}

#[test]
fn evaluate_is_idempotent() {
    let (graph, catalog) = sample();
    let engine = ScoringEngine::default();
    let strengths: HashMap<String, f64> = [("PPI_TX".to_string(), 0.45)].into_iter().collect();
    let a = engine.evaluate(&graph, &catalog, &strengths);
    let b = engine.evaluate(&graph, &catalog, &strengths);
    assert_eq!(a.impact, b.impact);
    assert_eq!(a.ranking, b.ranking);
    assert_eq!(a.defense, b.defense);
    assert_eq!(a.summary, b.summary);
}

#[test]
fn evaluate_records_reads_the_stores() {
    let (graph, catalog) = sample();
    let mut history = CheckInHistory::new();
    for d in 4..=10 {
        history.record(day(d), "PPI_TX");
    }
    history.record(day(1), "CPAP_TX");
    let records = InMemoryRecords::new(
        history,
        vec![EffectivenessRating::new("PPI_TX", Effectiveness::HighlyEffective)],
        vec![],
    );

    let engine = ScoringEngine::default();
    let eval = engine
        .evaluate_records(&graph, &catalog, day(10), &records, &records)
        .unwrap();

    assert_eq!(eval.defense["REFLUX"].score, 1.0);
    assert!(eval.defense["REFLUX"].is_direct);
    // CPAP's only check-in is outside the window.
    assert_eq!(eval.defense["APNEA"].score, 0.0);
    assert!(!eval.defense["APNEA"].is_direct);
    assert!((eval.defense["AROUSAL"].score - 0.8).abs() < 1e-12);
    assert!((eval.defense["GRINDING"].score - 0.64).abs() < 1e-12);
    assert_eq!(engine.style(&eval.defense["GRINDING"]).tier, DefenseTier::Defended);
}

#[test]
fn ranking_prefers_wider_reach() {
    let (graph, catalog) = sample();
    let ranked = ScoringEngine::default().ranked_impact(&graph, &catalog);
    // Both reach three nodes with identical weights; the id decides.
    assert_eq!(ranked[0].score, ranked[1].score);
    assert_eq!(ranked[0].intervention_id, "CPAP_TX");
    assert_eq!(ranked[1].intervention_id, "PPI_TX");
}

#[test]
fn engine_from_toml() {
    let engine = ScoringEngine::from_toml(
        r#"
        [scoring]
        cascade_decay = 0.7

        [adherence]
        window_days = 14
        "#,
    )
    .unwrap();
    assert_eq!(engine.config().scoring.cascade_decay, 0.7);
    assert_eq!(engine.config().adherence.window_days, 14);
}

#[test]
fn engine_rejects_invalid_config() {
    let err = ScoringEngine::from_toml("[scoring]\ncascade_decay = 1.5\n").unwrap_err();
    assert!(matches!(
        err,
        BulwarkError::InvalidConfiguration(ConfigError::CascadeDecayOutOfRange { .. })
    ));
    let err = ScoringEngine::from_toml("[adherence]\nwindow_days = 0\n").unwrap_err();
    assert!(matches!(
        err,
        BulwarkError::InvalidConfiguration(ConfigError::EmptyWindow)
    ));
}

#[test]
fn evaluation_serializes_camel_case() {
    let (graph, catalog) = sample();
    let eval = ScoringEngine::default().evaluate(&graph, &catalog, &HashMap::<String, f64>::new());
    let json = serde_json::to_value(&eval).unwrap();
    assert_eq!(json["summary"]["nodeCount"], 4);
    assert_eq!(json["defense"]["REFLUX"]["isDirect"], false);
    assert_eq!(json["impact"]["PPI_TX"]["reachableCount"], 3);
}
