use thiserror::Error;

/// Errors produced by type construction and parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("Team name must be between 3 and 30 characters")]
    InvalidTeamName { len: usize },

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("invalid identifier: {0}")]
    InvalidId(String),
}
