use std::collections::{HashMap, VecDeque};

use petgraph::graph::NodeIndex;
use tracing::debug;

use bulwark_core::config::ScoringConfig;
use bulwark_core::errors::BulwarkResult;
use bulwark_core::models::DefenseResult;
use bulwark_core::traits::IStrengthSource;
use bulwark_graph::{CausalGraph, InterventionCatalog};
use bulwark_observability::defense_span;

/// Per-node defense from practiced interventions, cascaded downstream.
///
/// Directly targeted nodes start at `min(1, Σ strength)`. Contributions then
/// flow along the forward adjacency as an explicit FIFO worklist: each hop
/// multiplies the carried increment by the decay, a child's score grows by that
/// increment (capped at 1), and the child is re-enqueued only when the new
/// increment is strictly larger than any increment previously routed through
/// it. Increments shrink geometrically and are pruned below the cutoff, so the
/// pass terminates on cyclic graphs.
#[derive(Debug, Clone, Default)]
pub struct DefenseCascader {
    config: ScoringConfig,
}

/// Worklist counters for one cascade pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeStats {
    /// Directly defended nodes that seeded the queue.
    pub seeded: usize,
    pub dequeued: usize,
    /// Re-enqueues after a strictly larger increment.
    pub enqueued: usize,
    /// Score raises that did not re-enqueue.
    pub absorbed: usize,
    /// Child expansions skipped by the cutoff.
    pub pruned: usize,
}

impl DefenseCascader {
    pub fn new(config: ScoringConfig) -> BulwarkResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// `min(1, Σ strength)` over the interventions targeting each node, in
    /// first-targeted order. Intervention nodes are never emitted.
    pub fn compute_direct_scores<S>(
        &self,
        graph: &CausalGraph,
        catalog: &InterventionCatalog,
        strengths: &S,
    ) -> Vec<(String, f64)>
    where
        S: IStrengthSource + ?Sized,
    {
        catalog
            .targeted_nodes()
            .filter(|(node, _)| graph.contains(node) && !graph.is_intervention(node))
            .map(|(node, txs)| {
                let total: f64 = txs.iter().map(|tx| unit(strengths.strength(tx))).sum();
                (node.to_string(), total.min(1.0))
            })
            .collect()
    }

    /// Defense result for every non-intervention node in the graph.
    pub fn compute_defense_scores<S>(
        &self,
        graph: &CausalGraph,
        catalog: &InterventionCatalog,
        strengths: &S,
    ) -> HashMap<String, DefenseResult>
    where
        S: IStrengthSource + ?Sized,
    {
        self.compute_with_stats(graph, catalog, strengths).0
    }

    /// As [`Self::compute_defense_scores`], plus worklist counters.
    pub fn compute_with_stats<S>(
        &self,
        graph: &CausalGraph,
        catalog: &InterventionCatalog,
        strengths: &S,
    ) -> (HashMap<String, DefenseResult>, CascadeStats)
    where
        S: IStrengthSource + ?Sized,
    {
        let _span = defense_span!(graph.node_count()).entered();

        let n = graph.node_count();
        let mut scored = vec![false; n];
        for idx in graph.node_indices() {
            scored[idx.index()] = !graph.node_at(idx).is_intervention();
        }
        let mut scores = vec![0.0_f64; n];
        let mut is_direct = vec![false; n];

        let mut stats = CascadeStats::default();
        let mut queue: VecDeque<(NodeIndex, f64)> = VecDeque::new();

        for (node, direct) in self.compute_direct_scores(graph, catalog, strengths) {
            let Some(idx) = graph.index_of(&node) else {
                continue;
            };
            if direct > 0.0 {
                scores[idx.index()] = direct;
                is_direct[idx.index()] = true;
                queue.push_back((idx, direct));
                stats.seeded += 1;
            }
        }

        self.cascade(graph, &scored, &mut scores, queue, &mut stats);

        debug!(
            seeded = stats.seeded,
            dequeued = stats.dequeued,
            enqueued = stats.enqueued,
            absorbed = stats.absorbed,
            pruned = stats.pruned,
            "defense cascade finished"
        );

        let results = graph
            .node_indices()
            .filter(|idx| scored[idx.index()])
            .map(|idx| {
                let id = graph.id_at(idx).to_string();
                let result = DefenseResult {
                    node_id: id.clone(),
                    score: scores[idx.index()],
                    is_direct: is_direct[idx.index()],
                };
                (id, result)
            })
            .collect();
        (results, stats)
    }

    fn cascade(
        &self,
        graph: &CausalGraph,
        scored: &[bool],
        scores: &mut [f64],
        mut queue: VecDeque<(NodeIndex, f64)>,
        stats: &mut CascadeStats,
    ) {
        let decay = self.config.cascade_decay;
        let cutoff = self.config.min_propagation_strength;
        // Largest increment propagated onward from each node so far.
        let mut best_increment = vec![0.0_f64; scores.len()];

        while let Some((current, strength)) = queue.pop_front() {
            stats.dequeued += 1;
            let cascaded = strength * decay;

            for &child in graph.forward_neighbors(current) {
                if cascaded < cutoff {
                    stats.pruned += 1;
                    continue;
                }
                let c = child.index();
                if !scored[c] {
                    continue;
                }
                let updated = (scores[c] + cascaded).min(1.0);
                if updated > scores[c] {
                    scores[c] = updated;
                    if cascaded > best_increment[c] {
                        best_increment[c] = cascaded;
                        queue.push_back((child, cascaded));
                        stats.enqueued += 1;
                    } else {
                        stats.absorbed += 1;
                    }
                }
            }
        }
    }
}

/// Clamp a collaborator-supplied strength into [0, 1]; non-finite counts as 0.
fn unit(strength: f64) -> f64 {
    if strength.is_finite() {
        strength.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
