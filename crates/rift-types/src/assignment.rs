use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{AssignmentId, PlayerId, TeamId};

/// The binding of one player to one team.
///
/// Scarce within a league: the roster engine guarantees a player appears in
/// at most one team's assignment set per league. The same player may be
/// assigned simultaneously in different leagues.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub team_id: TeamId,
    pub player_id: PlayerId,
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    pub fn new(team_id: TeamId, player_id: PlayerId) -> Self {
        Self {
            id: AssignmentId::new(),
            team_id,
            player_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assignment_links_team_and_player() {
        let team = TeamId::new();
        let player = PlayerId::new();
        let assignment = Assignment::new(team, player);
        assert_eq!(assignment.team_id, team);
        assert_eq!(assignment.player_id, player);
    }
}
