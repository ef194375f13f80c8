use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, info};

use rift_store::{LedgerStore, WriteOp};
use rift_types::{validate_team_name, League, LeagueId, Team, UserId};

use crate::error::{LeagueError, LeagueResult};
use crate::outcome::{JoinOutcome, JoinRejection, StandingsRow};
use crate::spec::{LeaguePatch, LeagueSpec};

/// The league membership manager.
///
/// Every mutation runs inside one store transaction, so the capacity and
/// one-team-per-user rules hold under concurrent joins and a league is
/// never committed without its owner's team.
pub struct LeagueService {
    store: Arc<dyn LedgerStore>,
}

impl LeagueService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Create a league and its owner's team as one atomic unit.
    pub fn create_league(
        &self,
        owner_id: UserId,
        spec: LeagueSpec,
    ) -> LeagueResult<(League, Team)> {
        if spec.max_teams < 2 {
            return Err(LeagueError::InvalidSpec(format!(
                "max_teams must be at least 2, got {}",
                spec.max_teams
            )));
        }

        let league = League::new(
            spec.name.clone(),
            spec.season_id.clone(),
            owner_id,
            spec.max_teams,
            spec.max_players,
            spec.budget,
        );
        let owner_team = Team::new(
            league.id,
            owner_id,
            format!("{} Owner's Team", spec.name),
            league.budget,
        );

        self.store.transact(&mut |_view| {
            Ok(vec![
                WriteOp::CreateLeague(league.clone()),
                WriteOp::CreateTeam(owner_team.clone()),
            ])
        })?;

        info!(league = %league.id, owner = %owner_id, "league created");
        Ok((league, owner_team))
    }

    /// Join a league with a new team.
    ///
    /// The boundary layer validates the team name first, but the name is
    /// re-checked here: it is invariant-bearing, not presentation-only.
    /// Rejections come back as [`JoinOutcome::Rejected`] with the message
    /// to show the user.
    pub fn join_league(
        &self,
        user_id: UserId,
        league_id: LeagueId,
        team_name: &str,
    ) -> LeagueResult<JoinOutcome> {
        if validate_team_name(team_name).is_err() {
            return Ok(JoinOutcome::Rejected(JoinRejection::InvalidTeamName));
        }

        let mut outcome = JoinOutcome::Rejected(JoinRejection::LeagueNotFound);
        self.store.transact(&mut |view| {
            let Some(league) = view.league(league_id) else {
                outcome = JoinOutcome::Rejected(JoinRejection::LeagueNotFound);
                return Ok(vec![]);
            };
            if view.teams_in_league(league_id).len() >= league.max_teams as usize {
                outcome = JoinOutcome::Rejected(JoinRejection::LeagueFull);
                return Ok(vec![]);
            }
            if view.team_for_user(league_id, user_id).is_some() {
                outcome = JoinOutcome::Rejected(JoinRejection::AlreadyMember);
                return Ok(vec![]);
            }

            let team = Team::new(league_id, user_id, team_name, league.budget);
            outcome = JoinOutcome::Joined(team.clone());
            Ok(vec![WriteOp::CreateTeam(team)])
        })?;

        match &outcome {
            JoinOutcome::Joined(team) => {
                info!(league = %league_id, team = %team.id, user = %user_id, "team joined league");
            }
            JoinOutcome::Rejected(rejection) => {
                debug!(league = %league_id, user = %user_id, %rejection, "join rejected");
            }
        }
        Ok(outcome)
    }

    /// Delete a league and everything it owns, in one transaction with an
    /// explicit cascade order: assignments, then teams, then the league.
    pub fn delete_league(&self, id: LeagueId) -> LeagueResult<()> {
        let mut found = false;
        self.store.transact(&mut |view| {
            if view.league(id).is_none() {
                return Ok(vec![]);
            }
            found = true;

            let teams = view.teams_in_league(id);
            let mut ops = Vec::new();
            for team in &teams {
                for assignment in view.assignments_for_team(team.id) {
                    ops.push(WriteOp::DeleteAssignment(assignment.id));
                }
            }
            for team in &teams {
                ops.push(WriteOp::DeleteTeam(team.id));
            }
            ops.push(WriteOp::DeleteLeague(id));
            Ok(ops)
        })?;

        if !found {
            return Err(LeagueError::NotFound(id));
        }
        info!(league = %id, "league deleted");
        Ok(())
    }

    /// Apply a partial metadata update.
    ///
    /// Shrinking `max_teams` below the current team count is refused:
    /// existing teams are never orphaned by a metadata edit.
    pub fn update_league(&self, id: LeagueId, patch: LeaguePatch) -> LeagueResult<League> {
        let mut result: Option<LeagueResult<League>> = None;
        self.store.transact(&mut |view| {
            let Some(mut league) = view.league(id) else {
                result = Some(Err(LeagueError::NotFound(id)));
                return Ok(vec![]);
            };

            if let Some(max_teams) = patch.max_teams {
                let current = view.teams_in_league(id).len();
                if max_teams < 2 || (max_teams as usize) < current {
                    result = Some(Err(LeagueError::InvalidSpec(format!(
                        "max_teams {max_teams} is below the current team count {current}"
                    ))));
                    return Ok(vec![]);
                }
                league.max_teams = max_teams;
            }
            if let Some(name) = &patch.name {
                league.name = name.clone();
            }
            if let Some(max_players) = patch.max_players {
                league.max_players = max_players;
            }
            if let Some(budget) = patch.budget {
                league.budget = budget;
            }

            result = Some(Ok(league.clone()));
            Ok(vec![WriteOp::UpdateLeague(league)])
        })?;

        result.unwrap_or(Err(LeagueError::NotFound(id)))
    }

    /// Look up a league by id.
    pub fn get_league(&self, id: LeagueId) -> LeagueResult<Option<League>> {
        let mut league = None;
        self.store.read(&mut |view| league = view.league(id))?;
        Ok(league)
    }

    /// Leagues the user owns or plays in, in creation order.
    pub fn user_leagues(&self, user_id: UserId) -> LeagueResult<Vec<League>> {
        let mut leagues = Vec::new();
        self.store.read(&mut |view| {
            leagues = view
                .leagues()
                .into_iter()
                .filter(|l| {
                    l.owner_id == user_id || view.team_for_user(l.id, user_id).is_some()
                })
                .collect();
        })?;
        Ok(leagues)
    }

    /// The league table, ranked by points (ties in creation order).
    pub fn standings(&self, league_id: LeagueId) -> LeagueResult<Vec<StandingsRow>> {
        let mut found = false;
        let mut rows = Vec::new();
        self.store.read(&mut |view| {
            if view.league(league_id).is_none() {
                return;
            }
            found = true;

            let mut teams = view.teams_in_league(league_id);
            teams.sort_by(|a, b| {
                b.points.partial_cmp(&a.points).unwrap_or(Ordering::Equal)
            });
            rows = teams
                .into_iter()
                .enumerate()
                .map(|(index, team)| StandingsRow {
                    position: index + 1,
                    roster_size: view.assignments_for_team(team.id).len(),
                    team_id: team.id,
                    name: team.name,
                    points: team.points,
                    budget: team.budget,
                })
                .collect();
        })?;

        if !found {
            return Err(LeagueError::NotFound(league_id));
        }
        Ok(rows)
    }
}
