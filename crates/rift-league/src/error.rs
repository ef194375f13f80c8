use rift_store::StoreError;
use rift_types::LeagueId;

/// Faults from league operations.
///
/// Join-time business rejections are [`JoinOutcome`](crate::JoinOutcome)
/// values, not errors.
#[derive(Debug, thiserror::Error)]
pub enum LeagueError {
    /// An operation referenced a league id that does not exist.
    #[error("league not found: {0}")]
    NotFound(LeagueId),

    /// The requested league shape is unusable.
    #[error("invalid league spec: {0}")]
    InvalidSpec(String),

    /// The store failed; propagated unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for league operations.
pub type LeagueResult<T> = Result<T, LeagueError>;
