//! The standard admission checks, in pipeline order.

use crate::check::{AdmissionCheck, AdmissionRequest, RejectReason, TradeKind};

/// The team's roster must be below the league's per-team cap.
pub struct CapacityCheck;

impl AdmissionCheck for CapacityCheck {
    fn name(&self) -> &'static str {
        "capacity"
    }

    fn evaluate(&self, request: &AdmissionRequest<'_>) -> Option<RejectReason> {
        if request.roster_size >= request.league.max_players as usize {
            return Some(RejectReason::RosterFull);
        }
        None
    }
}

/// The player must not already be assigned within this league.
///
/// Scarcity is scoped per league: the same player owned in a different
/// league does not block admission here.
pub struct ExclusivityCheck;

impl AdmissionCheck for ExclusivityCheck {
    fn name(&self) -> &'static str {
        "exclusivity"
    }

    fn evaluate(&self, request: &AdmissionRequest<'_>) -> Option<RejectReason> {
        if request.league_assignment.is_some() {
            return Some(RejectReason::PlayerUnavailable);
        }
        None
    }
}

/// The team must be able to pay the player's price. Buys only; a sell
/// releases money and is never blocked by budget.
pub struct BudgetCheck;

impl AdmissionCheck for BudgetCheck {
    fn name(&self) -> &'static str {
        "budget"
    }

    fn evaluate(&self, request: &AdmissionRequest<'_>) -> Option<RejectReason> {
        if request.trade == TradeKind::Sell {
            return None;
        }
        if request.team.budget < request.player.price {
            return Some(RejectReason::InsufficientFunds);
        }
        None
    }
}
