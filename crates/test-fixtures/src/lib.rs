//! Test fixture loader for Bulwark golden scenarios.
//!
//! Each golden file carries a graph document, an adherence window, ratings and
//! habit classifications, plus the expected impact, ranking and defense output.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Expected defense output for one node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedDefense {
    pub score: f64,
    pub is_direct: bool,
}

/// Expected impact output for one intervention.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedImpact {
    pub score: f64,
    pub reachable_count: usize,
}

/// A complete golden scenario.
///
/// Dates and rating names are kept as strings so this crate stays free of
/// engine types; tests convert them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioFixture {
    #[serde(default)]
    pub description: String,
    /// Absent means the engine default.
    pub cascade_decay: Option<f64>,
    pub as_of: String,
    pub window_days: u32,
    /// Graph document, `{ nodes: [{ data }], edges: [{ data }] }`.
    pub graph: serde_json::Value,
    /// Day key (`YYYY-MM-DD`) to practiced intervention ids.
    #[serde(default)]
    pub check_ins: BTreeMap<String, Vec<String>>,
    /// Intervention id to effectiveness name.
    #[serde(default)]
    pub ratings: BTreeMap<String, String>,
    /// Intervention id to habit status name.
    #[serde(default)]
    pub habit_classifications: BTreeMap<String, String>,
    pub expected_defense: BTreeMap<String, ExpectedDefense>,
    pub expected_impact: BTreeMap<String, ExpectedImpact>,
    pub expected_ranking: Vec<String>,
}

impl ScenarioFixture {
    /// The graph document re-serialized as JSON text.
    pub fn graph_json(&self) -> String {
        self.graph.to_string()
    }
}

/// Load a golden scenario by file name, e.g. `"golden/gerd_scenario.json"`.
pub fn load_scenario(relative_path: &str) -> ScenarioFixture {
    load_fixture(relative_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().join("golden").exists(), "golden directory not found");
    }

    #[test]
    fn all_golden_files_exist() {
        let files = ["golden/gerd_scenario.json", "golden/bruxism_network.json"];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn every_golden_file_parses_as_scenario() {
        let files = list_fixtures("golden");
        assert_eq!(files.len(), 2, "Expected 2 golden scenarios, found {}", files.len());
        for file in &files {
            let content = std::fs::read_to_string(file)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", file.display(), e));
            let scenario: ScenarioFixture = serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", file.display(), e));
            assert_eq!(
                scenario.expected_ranking.len(),
                scenario.expected_impact.len(),
                "{}: ranking and impact disagree",
                file.display()
            );
        }
    }

    #[test]
    fn gerd_scenario_shape() {
        let s = load_scenario("golden/gerd_scenario.json");
        assert_eq!(s.cascade_decay, Some(0.7));
        assert_eq!(s.window_days, 7);
        assert_eq!(s.check_ins.len(), 7);
        assert_eq!(s.graph["nodes"].as_array().unwrap().len(), 3);
        assert_eq!(s.expected_ranking, vec!["PPI_TX".to_string()]);
    }

    #[test]
    fn bruxism_defaults_decay() {
        let s = load_scenario("golden/bruxism_network.json");
        assert!(s.cascade_decay.is_none());
        assert_eq!(s.expected_defense.len(), 18);
        assert_eq!(s.expected_impact.len(), 7);
    }
}
