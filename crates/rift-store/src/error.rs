use rift_types::{LeagueId, TeamId};

/// Errors from ledger store operations.
///
/// Every variant aborts the enclosing transaction; no partial state is ever
/// left behind.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// An op referenced an entity that does not exist.
    #[error("{kind} not found: {id}")]
    MissingEntity { kind: &'static str, id: String },

    /// A create op collided with an existing entity id.
    #[error("duplicate {kind}: {id}")]
    DuplicateEntity { kind: &'static str, id: String },

    /// A budget adjustment would drive a team's budget below zero.
    #[error("budget underflow for team {team}: {budget} {delta:+}")]
    BudgetUnderflow {
        team: TeamId,
        budget: u64,
        delta: i64,
    },

    /// A budget adjustment overflowed the currency range.
    #[error("budget overflow for team {team}")]
    BudgetOverflow { team: TeamId },

    /// Attempted to delete a league that still has teams. Callers must
    /// cascade explicitly: assignments, then teams, then the league.
    #[error("league {0} still has teams")]
    LeagueNotEmpty(LeagueId),

    /// Attempted to delete a team that still has assignments.
    #[error("team {0} still has assignments")]
    TeamNotEmpty(TeamId),

    /// The storage backend is unusable (connection lost, I/O fault).
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
