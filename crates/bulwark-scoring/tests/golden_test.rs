//! Golden scenarios: full pipeline from graph document and check-ins to impact,
//! ranking and defense, compared against precomputed values.

use chrono::NaiveDate;

use bulwark_adherence::{AdherenceAggregator, CheckInHistory};
use bulwark_core::config::{AdherenceConfig, BulwarkConfig, ScoringConfig};
use bulwark_core::models::{Effectiveness, EffectivenessRating, HabitClassification, HabitStatus};
use bulwark_graph::{CausalGraph, InterventionCatalog};
use bulwark_scoring::ScoringEngine;
use test_fixtures::{list_fixtures, load_scenario, ScenarioFixture};

const TOLERANCE: f64 = 1e-9;

fn config_for(fixture: &ScenarioFixture) -> BulwarkConfig {
    BulwarkConfig {
        scoring: fixture
            .cascade_decay
            .map(ScoringConfig::with_decay)
            .unwrap_or_default(),
        adherence: AdherenceConfig::with_window(fixture.window_days),
        ..BulwarkConfig::default()
    }
}

fn aggregator_for(fixture: &ScenarioFixture) -> AdherenceAggregator {
    let as_of = NaiveDate::parse_from_str(&fixture.as_of, "%Y-%m-%d").unwrap();
    let history = CheckInHistory::from_day_keys(fixture.check_ins.clone()).unwrap();
    let ratings = fixture.ratings.iter().map(|(id, name)| {
        EffectivenessRating::new(id.clone(), Effectiveness::from_str_name(name).unwrap())
    });
    let habits = fixture
        .habit_classifications
        .iter()
        .map(|(id, name)| {
            HabitClassification::new(id.clone(), HabitStatus::from_str_lenient(name))
        });
    AdherenceAggregator::new(AdherenceConfig::with_window(fixture.window_days), as_of)
        .unwrap()
        .with_history(&history)
        .with_ratings(ratings)
        .with_habit_classifications(habits)
}

fn check_scenario(path: &str) {
    let fixture = load_scenario(path);
    let graph = CausalGraph::from_json(&fixture.graph_json()).unwrap();
    let catalog = InterventionCatalog::from_graph(&graph);
    let engine = ScoringEngine::new(config_for(&fixture)).unwrap();
    let aggregator = aggregator_for(&fixture);

    let eval = engine.evaluate(&graph, &catalog, &aggregator);

    assert_eq!(eval.impact.len(), fixture.expected_impact.len(), "{path}: impact size");
    for (id, expected) in &fixture.expected_impact {
        let got = &eval.impact[id];
        assert!(
            (got.score - expected.score).abs() < TOLERANCE,
            "{path}: impact {id} = {}, expected {}",
            got.score,
            expected.score
        );
        assert_eq!(got.reachable_count, expected.reachable_count, "{path}: reach {id}");
    }

    let ranking: Vec<_> = eval.ranking.iter().map(|r| r.intervention_id.clone()).collect();
    assert_eq!(ranking, fixture.expected_ranking, "{path}: ranking");

    assert_eq!(eval.defense.len(), fixture.expected_defense.len(), "{path}: defense size");
    for (id, expected) in &fixture.expected_defense {
        let got = &eval.defense[id];
        assert!(
            (got.score - expected.score).abs() < TOLERANCE,
            "{path}: defense {id} = {}, expected {}",
            got.score,
            expected.score
        );
        assert_eq!(got.is_direct, expected.is_direct, "{path}: isDirect {id}");
    }
}

#[test]
fn gerd_scenario() {
    check_scenario("golden/gerd_scenario.json");
}

#[test]
fn bruxism_network() {
    check_scenario("golden/bruxism_network.json");
}

#[test]
fn every_golden_scenario_matches() {
    for path in list_fixtures("golden") {
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        check_scenario(&format!("golden/{name}"));
    }
}

#[test]
fn bruxism_summary_counts_tiers() {
    let fixture = load_scenario("golden/bruxism_network.json");
    let graph = CausalGraph::from_json(&fixture.graph_json()).unwrap();
    let catalog = InterventionCatalog::from_graph(&graph);
    let engine = ScoringEngine::new(config_for(&fixture)).unwrap();
    let eval = engine.evaluate(&graph, &catalog, &aggregator_for(&fixture));

    assert_eq!(eval.summary.node_count, 18);
    assert_eq!(eval.summary.defended, 6);
    assert_eq!(eval.summary.partial, 10);
    assert_eq!(eval.summary.undefended, 2);
    assert_eq!(eval.summary.direct, 6);
    let mean = fixture.expected_defense.values().map(|d| d.score).sum::<f64>() / 18.0;
    assert!((eval.summary.mean_score - mean).abs() < TOLERANCE);
}

#[test]
fn bruxism_habit_override_feeds_defense() {
    let fixture = load_scenario("golden/bruxism_network.json");
    let aggregator = aggregator_for(&fixture);
    // TX_MEDITATION is rated modest but classified helpful.
    assert_eq!(
        aggregator.weight_source("TX_MEDITATION"),
        bulwark_adherence::WeightSource::HabitStatus(HabitStatus::Helpful)
    );
}

#[test]
fn bruxism_graph_has_the_stress_loop() {
    let fixture = load_scenario("golden/bruxism_network.json");
    let graph = CausalGraph::from_json(&fixture.graph_json()).unwrap();
    let loops = graph.forward_cycles();
    assert_eq!(loops.len(), 1);
    assert!(loops[0].contains(&"STRESS".to_string()));
    assert!(loops[0].contains(&"WINDUP".to_string()));
}
