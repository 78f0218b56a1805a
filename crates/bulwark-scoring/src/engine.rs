use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use bulwark_adherence::AdherenceAggregator;
use bulwark_core::config::BulwarkConfig;
use bulwark_core::errors::BulwarkResult;
use bulwark_core::models::{DefenseResult, ImpactResult};
use bulwark_core::traits::{ICheckInSource, IRatingSource, IStrengthSource};
use bulwark_graph::{CausalGraph, InterventionCatalog};
use bulwark_presentation::{NodeStyle, PresentationMapper};

use crate::defense::DefenseCascader;
use crate::impact::NetworkImpactScorer;
use crate::ranking::rank_interventions;
use crate::summary::DefenseSummary;

/// Everything the dashboard shows for one graph and one adherence window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub impact: HashMap<String, ImpactResult>,
    /// Impact results, best first.
    pub ranking: Vec<ImpactResult>,
    pub defense: HashMap<String, DefenseResult>,
    pub summary: DefenseSummary,
}

/// Validated configuration wired to both scorers and the presentation mapper.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: BulwarkConfig,
    impact: NetworkImpactScorer,
    defense: DefenseCascader,
    mapper: PresentationMapper,
}

impl ScoringEngine {
    pub fn new(config: BulwarkConfig) -> BulwarkResult<Self> {
        config.validate()?;
        Ok(Self {
            impact: NetworkImpactScorer::new(config.scoring.clone())?,
            defense: DefenseCascader::new(config.scoring.clone())?,
            mapper: PresentationMapper::new(config.presentation.clone())?,
            config,
        })
    }

    pub fn from_toml(s: &str) -> BulwarkResult<Self> {
        Self::new(BulwarkConfig::from_toml(s)?)
    }

    pub fn config(&self) -> &BulwarkConfig {
        &self.config
    }

    pub fn mapper(&self) -> &PresentationMapper {
        &self.mapper
    }

    pub fn impact(
        &self,
        graph: &CausalGraph,
        catalog: &InterventionCatalog,
    ) -> HashMap<String, ImpactResult> {
        self.impact.compute_network_impact(graph, catalog)
    }

    pub fn ranked_impact(
        &self,
        graph: &CausalGraph,
        catalog: &InterventionCatalog,
    ) -> Vec<ImpactResult> {
        rank_interventions(&self.impact(graph, catalog))
    }

    pub fn defense<S>(
        &self,
        graph: &CausalGraph,
        catalog: &InterventionCatalog,
        strengths: &S,
    ) -> HashMap<String, DefenseResult>
    where
        S: IStrengthSource + ?Sized,
    {
        self.defense.compute_defense_scores(graph, catalog, strengths)
    }

    /// Adherence aggregator for the window ending on `as_of`, read from the stores.
    pub fn aggregator(
        &self,
        as_of: NaiveDate,
        check_ins: &dyn ICheckInSource,
        ratings: &dyn IRatingSource,
    ) -> BulwarkResult<AdherenceAggregator> {
        AdherenceAggregator::load(self.config.adherence.clone(), as_of, check_ins, ratings)
    }

    /// Impact and defense for one graph, computed on two threads.
    pub fn evaluate<S>(
        &self,
        graph: &CausalGraph,
        catalog: &InterventionCatalog,
        strengths: &S,
    ) -> Evaluation
    where
        S: IStrengthSource + ?Sized,
    {
        let (impact, defense) = rayon::join(
            || self.impact(graph, catalog),
            || self.defense(graph, catalog, strengths),
        );
        let ranking = rank_interventions(&impact);
        let summary = DefenseSummary::from_results(
            graph.node_indices().filter_map(|idx| defense.get(graph.id_at(idx))),
            &self.mapper,
        );
        Evaluation {
            impact,
            ranking,
            defense,
            summary,
        }
    }

    /// Load adherence from the record stores, then evaluate.
    pub fn evaluate_records(
        &self,
        graph: &CausalGraph,
        catalog: &InterventionCatalog,
        as_of: NaiveDate,
        check_ins: &dyn ICheckInSource,
        ratings: &dyn IRatingSource,
    ) -> BulwarkResult<Evaluation> {
        let aggregator = self.aggregator(as_of, check_ins, ratings)?;
        Ok(self.evaluate(graph, catalog, &aggregator))
    }

    pub fn style(&self, result: &DefenseResult) -> NodeStyle {
        self.mapper.style(result)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self {
            config: BulwarkConfig::default(),
            impact: NetworkImpactScorer::default(),
            defense: DefenseCascader::default(),
            mapper: PresentationMapper::default(),
        }
    }
}
