use std::cmp::Reverse;
use std::sync::Arc;

use tracing::debug;

use rift_roster::{AdmissionRequest, RosterEngine, TradeKind};
use rift_store::{LedgerStore, StoreError, WriteOp};
use rift_types::{Assignment, LeagueId, Player, PlayerId, TeamId};

use crate::error::{MarketError, MarketResult};
use crate::outcome::TradeOutcome;

const MSG_PURCHASED: &str = "Player purchased successfully";
const MSG_SOLD: &str = "Player sold successfully";
const MSG_NOT_IN_TEAM: &str = "Player not found in team";

/// Result cap for free-text player search.
const SEARCH_LIMIT: usize = 20;

/// The market transaction coordinator.
///
/// Every trade is one store transaction: the lookups, the roster-engine
/// admission, and the writes all see and touch a single serializable view,
/// so a buy's existence-check-then-insert cannot interleave with a
/// competing buy for the same player.
pub struct MarketService {
    store: Arc<dyn LedgerStore>,
    engine: RosterEngine,
}

impl MarketService {
    /// Create a coordinator with the standard admission pipeline.
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self::with_engine(store, RosterEngine::with_default_checks())
    }

    /// Create a coordinator with a custom admission pipeline.
    pub fn with_engine(store: Arc<dyn LedgerStore>, engine: RosterEngine) -> Self {
        Self { store, engine }
    }

    /// Buy a player for a team.
    ///
    /// Admission rejections (full roster, player taken, insufficient funds)
    /// come back as `Ok(TradeOutcome { success: false, .. })`. A missing
    /// team or player id is the contract fault
    /// [`MarketError::TeamOrPlayerNotFound`]. On success the assignment and
    /// the budget decrement commit atomically.
    pub fn buy_player(&self, team_id: TeamId, player_id: PlayerId) -> MarketResult<TradeOutcome> {
        let mut trade: MarketResult<TradeOutcome> = Err(MarketError::TeamOrPlayerNotFound);
        self.store.transact(&mut |view| {
            let (team, player) = match (view.team(team_id), view.player(player_id)) {
                (Some(team), Some(player)) => (team, player),
                _ => {
                    trade = Err(MarketError::TeamOrPlayerNotFound);
                    return Ok(vec![]);
                }
            };
            // The team's league is a store-level integrity guarantee.
            let league = view.league(team.league_id).ok_or_else(|| {
                StoreError::MissingEntity {
                    kind: "league",
                    id: team.league_id.to_string(),
                }
            })?;

            let roster_size = view.assignments_for_team(team.id).len();
            let league_assignment = view.assignment_for_player(league.id, player.id);
            let admission = self.engine.evaluate(&AdmissionRequest {
                league: &league,
                team: &team,
                player: &player,
                roster_size,
                league_assignment: league_assignment.as_ref(),
                trade: TradeKind::Buy,
            });

            if let Some(reason) = admission.reject_reason() {
                debug!(team = %team_id, player = %player_id, %reason, "buy rejected");
                trade = Ok(TradeOutcome::rejected(reason.to_string()));
                return Ok(vec![]);
            }

            debug!(team = %team_id, player = %player_id, price = player.price, "player purchased");
            trade = Ok(TradeOutcome::completed(MSG_PURCHASED));
            Ok(vec![
                WriteOp::CreateAssignment(Assignment::new(team.id, player.id)),
                WriteOp::AdjustTeamBudget {
                    team_id: team.id,
                    delta: -(player.price as i64),
                },
            ])
        })?;
        trade
    }

    /// Sell a player off a team, refunding the list price.
    ///
    /// An absent assignment is a normal rejection ("Player not found in
    /// team"). On success the assignment removal and the refund commit
    /// atomically.
    pub fn sell_player(&self, team_id: TeamId, player_id: PlayerId) -> MarketResult<TradeOutcome> {
        let mut trade: MarketResult<TradeOutcome> = Err(MarketError::TeamOrPlayerNotFound);
        self.store.transact(&mut |view| {
            let Some(assignment) = view.assignment(team_id, player_id) else {
                trade = Ok(TradeOutcome::rejected(MSG_NOT_IN_TEAM));
                return Ok(vec![]);
            };
            let player = view.player(player_id).ok_or_else(|| {
                StoreError::MissingEntity {
                    kind: "player",
                    id: player_id.to_string(),
                }
            })?;

            debug!(team = %team_id, player = %player_id, refund = player.price, "player sold");
            trade = Ok(TradeOutcome::completed(MSG_SOLD));
            Ok(vec![
                WriteOp::DeleteAssignment(assignment.id),
                WriteOp::AdjustTeamBudget {
                    team_id,
                    delta: player.price as i64,
                },
            ])
        })?;
        trade
    }

    /// Players not assigned to any team of the league, price descending,
    /// ties in creation order.
    pub fn available_players(&self, league_id: LeagueId) -> MarketResult<Vec<Player>> {
        let mut players = Vec::new();
        self.store.read(&mut |view| {
            players = view
                .players()
                .into_iter()
                .filter(|p| view.assignment_for_player(league_id, p.id).is_none())
                .collect();
        })?;
        // Stable sort: creation order breaks price ties.
        players.sort_by_key(|p| Reverse(p.price));
        Ok(players)
    }

    /// Players currently on a team, in assignment order.
    pub fn team_players(&self, team_id: TeamId) -> MarketResult<Vec<Player>> {
        let mut players = Vec::new();
        self.store.read(&mut |view| {
            players = view
                .assignments_for_team(team_id)
                .iter()
                .filter_map(|a| view.player(a.player_id))
                .collect();
        })?;
        Ok(players)
    }

    /// Free-text player search: case-insensitive match on player name or
    /// real-world team, or an exact role. Price descending, capped at
    /// [`SEARCH_LIMIT`]. With a league, players already owned there are
    /// filtered out.
    pub fn search_players(
        &self,
        query: &str,
        league_id: Option<LeagueId>,
    ) -> MarketResult<Vec<Player>> {
        let needle = query.to_lowercase();
        let role = query.parse::<rift_types::Role>().ok();

        let mut players = Vec::new();
        self.store.read(&mut |view| {
            players = view
                .players()
                .into_iter()
                .filter(|p| {
                    p.name.to_lowercase().contains(&needle)
                        || p.team_name.to_lowercase().contains(&needle)
                        || role == Some(p.role)
                })
                .filter(|p| match league_id {
                    Some(league) => view.assignment_for_player(league, p.id).is_none(),
                    None => true,
                })
                .collect();
        })?;
        players.sort_by_key(|p| Reverse(p.price));
        players.truncate(SEARCH_LIMIT);
        Ok(players)
    }
}
