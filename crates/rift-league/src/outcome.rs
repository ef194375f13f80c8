use std::fmt;

use serde::{Deserialize, Serialize};

use rift_types::{Team, TeamId};

/// Why a join request was turned down.
///
/// The `Display` form is the exact caller-facing message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinRejection {
    InvalidTeamName,
    LeagueNotFound,
    LeagueFull,
    AlreadyMember,
}

impl fmt::Display for JoinRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinRejection::InvalidTeamName => {
                write!(f, "Team name must be between 3 and 30 characters")
            }
            JoinRejection::LeagueNotFound => write!(f, "League not found"),
            JoinRejection::LeagueFull => write!(f, "League is full"),
            JoinRejection::AlreadyMember => {
                write!(f, "You already have a team in this league")
            }
        }
    }
}

/// The caller-facing result of a join request.
#[derive(Clone, Debug, PartialEq)]
pub enum JoinOutcome {
    /// The user's new team.
    Joined(Team),
    /// Rejected; the reason is shown to the user.
    Rejected(JoinRejection),
}

impl JoinOutcome {
    /// Returns `true` if a team was created.
    pub fn is_joined(&self) -> bool {
        matches!(self, JoinOutcome::Joined(_))
    }

    /// The created team, if any.
    pub fn team(&self) -> Option<&Team> {
        match self {
            JoinOutcome::Joined(team) => Some(team),
            JoinOutcome::Rejected(_) => None,
        }
    }

    /// The rejection, if any.
    pub fn rejection(&self) -> Option<JoinRejection> {
        match self {
            JoinOutcome::Joined(_) => None,
            JoinOutcome::Rejected(rejection) => Some(*rejection),
        }
    }
}

/// One row of a league's standings table, ranked by points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    /// 1-based rank.
    pub position: usize,
    pub team_id: TeamId,
    pub name: String,
    pub points: f64,
    pub roster_size: usize,
    pub budget: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_are_caller_facing() {
        assert_eq!(
            JoinRejection::InvalidTeamName.to_string(),
            "Team name must be between 3 and 30 characters"
        );
        assert_eq!(JoinRejection::LeagueNotFound.to_string(), "League not found");
        assert_eq!(JoinRejection::LeagueFull.to_string(), "League is full");
        assert_eq!(
            JoinRejection::AlreadyMember.to_string(),
            "You already have a team in this league"
        );
    }

    #[test]
    fn outcome_helpers() {
        let rejected = JoinOutcome::Rejected(JoinRejection::LeagueFull);
        assert!(!rejected.is_joined());
        assert_eq!(rejected.rejection(), Some(JoinRejection::LeagueFull));
        assert!(rejected.team().is_none());
    }
}
