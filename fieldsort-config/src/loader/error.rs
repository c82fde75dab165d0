use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to load fieldsort configuration: {0}")]
    Source(#[source] anyhow::Error),
    #[error("sorter.parallel_threshold must be at least 1")]
    ZeroParallelThreshold,
    #[error("logging.filter must not be empty")]
    EmptyLogFilter,
    #[error("invalid logging.filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },
}
