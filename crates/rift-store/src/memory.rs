use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use tracing::debug;

use rift_types::{
    Assignment, AssignmentId, League, LeagueId, Player, PlayerId, Team, TeamId, UserId,
};

use crate::error::{StoreError, StoreResult};
use crate::op::WriteOp;
use crate::traits::{LedgerStore, StateView, TxnBody};

// ---------------------------------------------------------------------------
// LedgerState
// ---------------------------------------------------------------------------

/// The four entity tables. `BTreeMap` keyed by time-ordered id gives
/// deterministic, creation-ordered iteration.
#[derive(Clone, Default)]
struct LedgerState {
    leagues: BTreeMap<LeagueId, League>,
    teams: BTreeMap<TeamId, Team>,
    players: BTreeMap<PlayerId, Player>,
    assignments: BTreeMap<AssignmentId, Assignment>,
}

impl LedgerState {
    /// The league a team belongs to, resolved through the team record.
    fn league_of_team(&self, team_id: TeamId) -> Option<LeagueId> {
        self.teams.get(&team_id).map(|t| t.league_id)
    }

    /// Apply one op, or fail with the integrity violation it would cause.
    fn apply(&mut self, op: &WriteOp) -> StoreResult<()> {
        match op {
            WriteOp::CreateLeague(league) => {
                if self.leagues.contains_key(&league.id) {
                    return Err(StoreError::DuplicateEntity {
                        kind: "league",
                        id: league.id.to_string(),
                    });
                }
                self.leagues.insert(league.id, league.clone());
            }
            WriteOp::UpdateLeague(league) => {
                let slot = self.leagues.get_mut(&league.id).ok_or_else(|| {
                    StoreError::MissingEntity {
                        kind: "league",
                        id: league.id.to_string(),
                    }
                })?;
                *slot = league.clone();
            }
            WriteOp::DeleteLeague(id) => {
                if self.teams.values().any(|t| t.league_id == *id) {
                    return Err(StoreError::LeagueNotEmpty(*id));
                }
                self.leagues.remove(id).ok_or_else(|| StoreError::MissingEntity {
                    kind: "league",
                    id: id.to_string(),
                })?;
            }
            WriteOp::CreateTeam(team) => {
                if !self.leagues.contains_key(&team.league_id) {
                    return Err(StoreError::MissingEntity {
                        kind: "league",
                        id: team.league_id.to_string(),
                    });
                }
                if self.teams.contains_key(&team.id) {
                    return Err(StoreError::DuplicateEntity {
                        kind: "team",
                        id: team.id.to_string(),
                    });
                }
                self.teams.insert(team.id, team.clone());
            }
            WriteOp::DeleteTeam(id) => {
                if self.assignments.values().any(|a| a.team_id == *id) {
                    return Err(StoreError::TeamNotEmpty(*id));
                }
                self.teams.remove(id).ok_or_else(|| StoreError::MissingEntity {
                    kind: "team",
                    id: id.to_string(),
                })?;
            }
            WriteOp::CreatePlayer(player) => {
                if self.players.contains_key(&player.id) {
                    return Err(StoreError::DuplicateEntity {
                        kind: "player",
                        id: player.id.to_string(),
                    });
                }
                self.players.insert(player.id, player.clone());
            }
            WriteOp::UpdatePlayer(player) => {
                let slot = self.players.get_mut(&player.id).ok_or_else(|| {
                    StoreError::MissingEntity {
                        kind: "player",
                        id: player.id.to_string(),
                    }
                })?;
                *slot = player.clone();
            }
            WriteOp::CreateAssignment(assignment) => {
                if !self.teams.contains_key(&assignment.team_id) {
                    return Err(StoreError::MissingEntity {
                        kind: "team",
                        id: assignment.team_id.to_string(),
                    });
                }
                if !self.players.contains_key(&assignment.player_id) {
                    return Err(StoreError::MissingEntity {
                        kind: "player",
                        id: assignment.player_id.to_string(),
                    });
                }
                if self.assignments.contains_key(&assignment.id) {
                    return Err(StoreError::DuplicateEntity {
                        kind: "assignment",
                        id: assignment.id.to_string(),
                    });
                }
                self.assignments.insert(assignment.id, assignment.clone());
            }
            WriteOp::DeleteAssignment(id) => {
                self.assignments
                    .remove(id)
                    .ok_or_else(|| StoreError::MissingEntity {
                        kind: "assignment",
                        id: id.to_string(),
                    })?;
            }
            WriteOp::AdjustTeamBudget { team_id, delta } => {
                let team = self.teams.get_mut(team_id).ok_or_else(|| {
                    StoreError::MissingEntity {
                        kind: "team",
                        id: team_id.to_string(),
                    }
                })?;
                let adjusted = if *delta >= 0 {
                    team.budget
                        .checked_add(*delta as u64)
                        .ok_or(StoreError::BudgetOverflow { team: team.id })?
                } else {
                    team.budget.checked_sub(delta.unsigned_abs()).ok_or(
                        StoreError::BudgetUnderflow {
                            team: team.id,
                            budget: team.budget,
                            delta: *delta,
                        },
                    )?
                };
                team.budget = adjusted;
            }
        }
        Ok(())
    }
}

impl StateView for LedgerState {
    fn league(&self, id: LeagueId) -> Option<League> {
        self.leagues.get(&id).cloned()
    }

    fn leagues(&self) -> Vec<League> {
        self.leagues.values().cloned().collect()
    }

    fn team(&self, id: TeamId) -> Option<Team> {
        self.teams.get(&id).cloned()
    }

    fn teams_in_league(&self, league_id: LeagueId) -> Vec<Team> {
        self.teams
            .values()
            .filter(|t| t.league_id == league_id)
            .cloned()
            .collect()
    }

    fn team_for_user(&self, league_id: LeagueId, user_id: UserId) -> Option<Team> {
        self.teams
            .values()
            .find(|t| t.league_id == league_id && t.user_id == user_id)
            .cloned()
    }

    fn player(&self, id: PlayerId) -> Option<Player> {
        self.players.get(&id).cloned()
    }

    fn players(&self) -> Vec<Player> {
        self.players.values().cloned().collect()
    }

    fn assignments_for_team(&self, team_id: TeamId) -> Vec<Assignment> {
        self.assignments
            .values()
            .filter(|a| a.team_id == team_id)
            .cloned()
            .collect()
    }

    fn assignment_for_player(
        &self,
        league_id: LeagueId,
        player_id: PlayerId,
    ) -> Option<Assignment> {
        self.assignments
            .values()
            .find(|a| {
                a.player_id == player_id && self.league_of_team(a.team_id) == Some(league_id)
            })
            .cloned()
    }

    fn assignment(&self, team_id: TeamId, player_id: PlayerId) -> Option<Assignment> {
        self.assignments
            .values()
            .find(|a| a.team_id == team_id && a.player_id == player_id)
            .cloned()
    }
}

// ---------------------------------------------------------------------------
// InMemoryLedgerStore
// ---------------------------------------------------------------------------

/// In-memory ledger store for tests, local play, and embedding.
///
/// Serializability comes from holding the write lock for the whole of
/// `transact`: the body's view and the op application are one critical
/// section, so a concurrent transaction either sees all of this one's
/// effects or runs entirely before it. Ops apply to a scratch copy that
/// replaces the live state only if every op succeeds.
pub struct InMemoryLedgerStore {
    inner: RwLock<LedgerState>,
    commits: AtomicU64,
}

impl InMemoryLedgerStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(LedgerState::default()),
            commits: AtomicU64::new(0),
        }
    }

    /// Number of committed (non-empty) transactions so far.
    pub fn commit_count(&self) -> u64 {
        self.commits.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn transact(&self, body: TxnBody<'_>) -> StoreResult<()> {
        let mut state = self.inner.write().expect("lock poisoned");

        let ops = body(&*state)?;
        if ops.is_empty() {
            return Ok(());
        }

        // All-or-nothing: mutate a scratch copy, swap in only on success.
        let mut next = state.clone();
        for op in &ops {
            next.apply(op)?;
        }
        *state = next;

        let commit = self.commits.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(commit, ops = ops.len(), "transaction committed");
        Ok(())
    }

    fn read(&self, body: &mut dyn FnMut(&dyn StateView)) -> StoreResult<()> {
        let state = self.inner.read().expect("lock poisoned");
        body(&*state);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryLedgerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.read().expect("lock poisoned");
        f.debug_struct("InMemoryLedgerStore")
            .field("leagues", &state.leagues.len())
            .field("teams", &state.teams.len())
            .field("players", &state.players.len())
            .field("assignments", &state.assignments.len())
            .field("commits", &self.commit_count())
            .finish()
    }
}
