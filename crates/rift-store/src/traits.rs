use rift_types::{
    Assignment, League, LeagueId, Player, PlayerId, Team, TeamId, UserId,
};

use crate::error::StoreResult;
use crate::op::WriteOp;

/// A consistent read view over ledger state.
///
/// A view handed to a transaction body reflects one snapshot: nothing
/// committed by a concurrent transaction becomes visible mid-body. Methods
/// return owned records; collections come back in id order, which for
/// time-ordered (UUID v7) ids is creation order.
pub trait StateView {
    fn league(&self, id: LeagueId) -> Option<League>;

    /// All leagues, in creation order.
    fn leagues(&self) -> Vec<League>;

    fn team(&self, id: TeamId) -> Option<Team>;

    /// All teams of a league, in creation order.
    fn teams_in_league(&self, league_id: LeagueId) -> Vec<Team>;

    /// The team a user owns in a league, if any. At most one exists.
    fn team_for_user(&self, league_id: LeagueId, user_id: UserId) -> Option<Team>;

    fn player(&self, id: PlayerId) -> Option<Player>;

    /// All known players, in creation order.
    fn players(&self) -> Vec<Player>;

    /// A team's assignments, in creation order.
    fn assignments_for_team(&self, team_id: TeamId) -> Vec<Assignment>;

    /// The assignment binding a player to any team of the given league,
    /// if one exists. Scarcity means there is never more than one.
    fn assignment_for_player(&self, league_id: LeagueId, player_id: PlayerId)
        -> Option<Assignment>;

    /// The assignment binding a player to this specific team, if any.
    fn assignment(&self, team_id: TeamId, player_id: PlayerId) -> Option<Assignment>;
}

/// A transaction body: decision logic run against one serializable view.
///
/// The ops it returns are applied atomically; returning an error aborts the
/// transaction with nothing applied. Returning an empty op list commits
/// nothing (the idiom for a business rejection decided inside the
/// transaction).
pub type TxnBody<'a> = &'a mut dyn FnMut(&dyn StateView) -> StoreResult<Vec<WriteOp>>;

/// The ledger store: atomic read-modify-write over league state.
///
/// All implementations must satisfy these invariants:
/// - `transact` executes its body and applies the returned ops as one
///   atomic unit with at least serializable isolation: a body observes
///   either all or none of any concurrent transaction's effects, and its
///   check-then-write sequence cannot interleave with another's.
/// - If the body or any op application fails, no op is applied.
/// - Ops are validated for referential integrity at application time;
///   violations abort the transaction (see [`crate::StoreError`]).
/// - `read` observes one consistent snapshot for the duration of the body.
///
/// Services receive their store handle at construction; there is no
/// process-global store.
pub trait LedgerStore: Send + Sync {
    /// Run `body` against a serializable view and commit its ops.
    fn transact(&self, body: TxnBody<'_>) -> StoreResult<()>;

    /// Run `body` against a read-only consistent snapshot.
    fn read(&self, body: &mut dyn FnMut(&dyn StateView)) -> StoreResult<()>;
}
