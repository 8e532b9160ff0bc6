use thiserror::Error;

/// Top-level error type for relation analysis.
#[derive(Debug, Error)]
pub enum RelsortError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// Errors raised by the in-memory data set.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("way references a node that is not in the data set (position {position})")]
    DanglingReference { position: usize },
}

/// Errors related to analysis and sorting rules.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("invalid rule parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`RelsortError`].
pub type Result<T> = std::result::Result<T, RelsortError>;
