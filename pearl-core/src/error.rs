use thiserror::Error;

/// Errors crossing the data-provider boundary.
///
/// Providers never panic into the controllers; an unreachable or failing
/// backing store surfaces here and is mapped to a status (employee
/// management) or an error return (other domains).
#[derive(Debug, Error)]
pub enum DataError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("duplicate: {0}")]
    Duplicate(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Result type for data-provider operations
pub type DataResult<T> = Result<T, DataError>;
