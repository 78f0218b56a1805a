/// Structural problems in a causal graph or intervention catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("edge {source_id} -> {target_id} references an unknown source node")]
    UnknownSource { source_id: String, target_id: String },

    #[error("edge {source_id} -> {target_id} references an unknown target node")]
    UnknownTarget { source_id: String, target_id: String },

    #[error("duplicate node id: {id}")]
    DuplicateNode { id: String },

    #[error("catalog references unknown intervention: {id}")]
    UnknownIntervention { id: String },

    #[error("catalog entry {id} is not an intervention node")]
    NotAnIntervention { id: String },

    #[error("intervention {intervention_id} targets unknown node {target_id}")]
    UnknownCatalogTarget {
        intervention_id: String,
        target_id: String,
    },

    #[error("unparsable graph document: {reason}")]
    Parse { reason: String },
}
