use serde::{Deserialize, Serialize};

/// Default team cap for a new league.
pub const DEFAULT_MAX_TEAMS: u32 = 10;
/// Default per-team roster cap.
pub const DEFAULT_MAX_PLAYERS: u32 = 8;
/// Default starting budget per team, in whole currency units.
pub const DEFAULT_BUDGET: u64 = 100_000_000;

/// The shape of a league to create.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueSpec {
    pub name: String,
    pub season_id: String,
    pub max_teams: u32,
    pub max_players: u32,
    pub budget: u64,
}

impl LeagueSpec {
    /// A spec with the standard caps and budget.
    pub fn new(name: impl Into<String>, season_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            season_id: season_id.into(),
            max_teams: DEFAULT_MAX_TEAMS,
            max_players: DEFAULT_MAX_PLAYERS,
            budget: DEFAULT_BUDGET,
        }
    }

    pub fn with_max_teams(mut self, max_teams: u32) -> Self {
        self.max_teams = max_teams;
        self
    }

    pub fn with_max_players(mut self, max_players: u32) -> Self {
        self.max_players = max_players;
        self
    }

    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }
}

/// A partial update to a league's metadata. `None` fields are untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaguePatch {
    pub name: Option<String>,
    pub max_teams: Option<u32>,
    pub max_players: Option<u32>,
    pub budget: Option<u64>,
}
