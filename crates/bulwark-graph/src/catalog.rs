//! Intervention catalog: intervention → direct targets, and the inverse.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use bulwark_core::errors::{BulwarkResult, GraphError};

use crate::model::CausalGraph;

/// One intervention and the causal nodes it acts on directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterventionCatalogEntry {
    pub intervention_id: String,
    pub targets: Vec<String>,
}

impl InterventionCatalogEntry {
    pub fn new<I, S>(intervention_id: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            intervention_id: intervention_id.into(),
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }
}

/// Lookup tables derived once from the catalog entries.
#[derive(Debug, Clone, Default)]
pub struct InterventionCatalog {
    /// Entries in graph order; targets in edge order without repeats.
    entries: Vec<InterventionCatalogEntry>,
    by_intervention: HashMap<String, usize>,
    /// target id → interventions targeting it, in first-seen order.
    by_target: HashMap<String, Vec<String>>,
    /// Targeted node ids in the order they were first targeted.
    target_order: Vec<String>,
}

impl InterventionCatalog {
    /// Derive the catalog from the graph: every edge leaving an intervention node
    /// names one direct target. Interventions without edges get an empty entry.
    pub fn from_graph(graph: &CausalGraph) -> Self {
        let mut catalog = Self::default();
        for node in graph.interventions() {
            catalog.entry_mut(&node.id);
        }
        for (source, target, _) in graph.edges() {
            if graph.is_intervention(source) {
                catalog.link(source, target);
            }
        }
        catalog
    }

    /// Build from explicit entries, validated against the graph.
    pub fn from_entries(
        graph: &CausalGraph,
        entries: impl IntoIterator<Item = InterventionCatalogEntry>,
    ) -> BulwarkResult<Self> {
        let mut catalog = Self::default();
        for entry in entries {
            let Some(node) = graph.node(&entry.intervention_id) else {
                return Err(GraphError::UnknownIntervention {
                    id: entry.intervention_id,
                }
                .into());
            };
            if !node.is_intervention() {
                return Err(GraphError::NotAnIntervention {
                    id: entry.intervention_id,
                }
                .into());
            }
            if entry.targets.is_empty() {
                warn!(intervention = %entry.intervention_id, "catalog entry has no targets");
            }
            catalog.entry_mut(&entry.intervention_id);
            for target in &entry.targets {
                if !graph.contains(target) {
                    return Err(GraphError::UnknownCatalogTarget {
                        intervention_id: entry.intervention_id.clone(),
                        target_id: target.clone(),
                    }
                    .into());
                }
                catalog.link(&entry.intervention_id, target);
            }
        }
        Ok(catalog)
    }

    fn entry_mut(&mut self, intervention_id: &str) -> &mut InterventionCatalogEntry {
        let pos = match self.by_intervention.get(intervention_id) {
            Some(&pos) => pos,
            None => {
                self.entries.push(InterventionCatalogEntry {
                    intervention_id: intervention_id.to_string(),
                    targets: Vec::new(),
                });
                let pos = self.entries.len() - 1;
                self.by_intervention.insert(intervention_id.to_string(), pos);
                pos
            }
        };
        &mut self.entries[pos]
    }

    fn link(&mut self, intervention_id: &str, target_id: &str) {
        let entry = self.entry_mut(intervention_id);
        if !entry.targets.iter().any(|t| t == target_id) {
            entry.targets.push(target_id.to_string());
        }
        if !self.by_target.contains_key(target_id) {
            self.target_order.push(target_id.to_string());
        }
        let sources = self.by_target.entry(target_id.to_string()).or_default();
        if !sources.iter().any(|s| s == intervention_id) {
            sources.push(intervention_id.to_string());
        }
    }

    /// Entries in catalog order.
    pub fn entries(&self) -> &[InterventionCatalogEntry] {
        &self.entries
    }

    /// Intervention ids in catalog order.
    pub fn intervention_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.intervention_id.as_str())
    }

    pub fn contains(&self, intervention_id: &str) -> bool {
        self.by_intervention.contains_key(intervention_id)
    }

    /// Direct targets of an intervention, in order. Unknown ids have none.
    pub fn targets_of(&self, intervention_id: &str) -> &[String] {
        self.by_intervention
            .get(intervention_id)
            .map(|&pos| self.entries[pos].targets.as_slice())
            .unwrap_or(&[])
    }

    /// Interventions that directly target `node_id`.
    pub fn interventions_targeting(&self, node_id: &str) -> &[String] {
        self.by_target
            .get(node_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every targeted node with its interventions, in first-targeted order.
    pub fn targeted_nodes(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.target_order
            .iter()
            .map(|node| (node.as_str(), self.interventions_targeting(node)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
