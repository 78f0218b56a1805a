use std::collections::HashMap;

use criterion::{criterion_group, criterion_main, Criterion};

use bulwark_core::models::{CausalEdge, CausalNode, EdgeType};
use bulwark_graph::{CausalGraph, InterventionCatalog};
use bulwark_scoring::{DefenseCascader, NetworkImpactScorer, ScoringEngine};

/// ~300 nodes: 20 interventions, 280 mechanisms with up to 3 forward edges each
/// and a feedback edge every tenth node.
fn build_network() -> (CausalGraph, HashMap<String, f64>) {
    let tx_count = 20;
    let n = 280;
    let mut nodes = Vec::with_capacity(tx_count + n);
    for t in 0..tx_count {
        nodes.push(CausalNode::new(format!("tx{t}"), format!("Intervention {t}"), "intervention"));
    }
    for i in 0..n {
        nodes.push(
            CausalNode::new(format!("n{i}"), format!("Node {i}"), "mechanism")
                .with_tier((i % 10) as i32),
        );
    }

    let mut edges = Vec::new();
    for t in 0..tx_count {
        for j in 0..3 {
            edges.push(CausalEdge::new(
                format!("tx{t}"),
                format!("n{}", (t * 7 + j * 13) % n),
                EdgeType::Intervention,
            ));
        }
    }
    for i in 0..n {
        for j in 1..=3 {
            let target = i + j * 2;
            if target < n {
                edges.push(CausalEdge::causal(format!("n{i}"), format!("n{target}")));
            }
        }
        if i % 10 == 9 {
            edges.push(CausalEdge::new(format!("n{i}"), format!("n{}", i - 9), EdgeType::Feedback));
        }
    }

    let graph = CausalGraph::new(nodes, edges).expect("bench graph is well formed");
    let strengths = (0..tx_count)
        .map(|t| (format!("tx{t}"), (t % 8) as f64 / 8.0))
        .collect();
    (graph, strengths)
}

fn bench_network_impact(c: &mut Criterion) {
    let (graph, _) = build_network();
    let catalog = InterventionCatalog::from_graph(&graph);
    let scorer = NetworkImpactScorer::default();

    c.bench_function("network_impact_300_nodes", |b| {
        b.iter(|| scorer.compute_network_impact(&graph, &catalog));
    });
}

fn bench_defense_cascade(c: &mut Criterion) {
    let (graph, strengths) = build_network();
    let catalog = InterventionCatalog::from_graph(&graph);
    let cascader = DefenseCascader::default();

    c.bench_function("defense_cascade_300_nodes", |b| {
        b.iter(|| cascader.compute_defense_scores(&graph, &catalog, &strengths));
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let (graph, strengths) = build_network();
    let catalog = InterventionCatalog::from_graph(&graph);
    let engine = ScoringEngine::default();

    c.bench_function("evaluate_300_nodes", |b| {
        b.iter(|| engine.evaluate(&graph, &catalog, &strengths));
    });
}

criterion_group!(benches, bench_network_impact, bench_defense_cascade, bench_evaluate);
criterion_main!(benches);
