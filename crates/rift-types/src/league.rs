use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{LeagueId, UserId};

/// A competitive group with a fixed team cap, roster cap, and starting
/// budget.
///
/// Invariants enforced by the services, not by this record:
/// - the number of teams never exceeds `max_teams`;
/// - every team starts with `budget` currency units;
/// - the owner always has a team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    pub season_id: String,
    pub owner_id: UserId,
    /// Maximum number of teams, owner's team included. Always >= 2 for
    /// leagues created through the membership manager.
    pub max_teams: u32,
    /// Roster cap per team.
    pub max_players: u32,
    /// Starting budget per team, in whole currency units.
    pub budget: u64,
    pub created_at: DateTime<Utc>,
}

impl League {
    pub fn new(
        name: impl Into<String>,
        season_id: impl Into<String>,
        owner_id: UserId,
        max_teams: u32,
        max_players: u32,
        budget: u64,
    ) -> Self {
        Self {
            id: LeagueId::new(),
            name: name.into(),
            season_id: season_id.into(),
            owner_id,
            max_teams,
            max_players,
            budget,
            created_at: Utc::now(),
        }
    }
}
