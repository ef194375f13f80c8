use serde::{Deserialize, Serialize};

use rift_types::{Assignment, AssignmentId, League, LeagueId, Player, Team, TeamId};

/// One write in a transaction's op sequence.
///
/// Ops are applied in order, all-or-nothing. Budget changes are expressed
/// as relative deltas so two transactions touching the same team compose
/// without a lost update, and so a buy's assignment insert and budget
/// decrement commit as one unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum WriteOp {
    CreateLeague(League),
    UpdateLeague(League),
    DeleteLeague(LeagueId),
    CreateTeam(Team),
    DeleteTeam(TeamId),
    CreatePlayer(Player),
    UpdatePlayer(Player),
    CreateAssignment(Assignment),
    DeleteAssignment(AssignmentId),
    AdjustTeamBudget { team_id: TeamId, delta: i64 },
}

impl WriteOp {
    /// Short op name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            WriteOp::CreateLeague(_) => "create-league",
            WriteOp::UpdateLeague(_) => "update-league",
            WriteOp::DeleteLeague(_) => "delete-league",
            WriteOp::CreateTeam(_) => "create-team",
            WriteOp::DeleteTeam(_) => "delete-team",
            WriteOp::CreatePlayer(_) => "create-player",
            WriteOp::UpdatePlayer(_) => "update-player",
            WriteOp::CreateAssignment(_) => "create-assignment",
            WriteOp::DeleteAssignment(_) => "delete-assignment",
            WriteOp::AdjustTeamBudget { .. } => "adjust-team-budget",
        }
    }
}
