//! Error taxonomy. Graph and configuration failures are fatal to a computation
//! and surfaced to the caller; absence of data is never an error.

mod config_error;
mod graph_error;

pub use config_error::ConfigError;
pub use graph_error::GraphError;

/// Top-level error for every fallible Bulwark operation.
#[derive(Debug, thiserror::Error)]
pub enum BulwarkError {
    #[error("malformed graph: {0}")]
    MalformedGraph(#[from] GraphError),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("record store {store} failed: {message}")]
    RecordSource { store: String, message: String },
}

/// Result alias used across the workspace.
pub type BulwarkResult<T> = Result<T, BulwarkError>;
