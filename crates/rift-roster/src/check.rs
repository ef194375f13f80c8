use std::fmt;

use serde::{Deserialize, Serialize};

use rift_types::{Assignment, League, Player, Team};

// ---------------------------------------------------------------------------
// AdmissionRequest
// ---------------------------------------------------------------------------

/// Whether the proposed assignment change acquires or releases a player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TradeKind {
    Buy,
    Sell,
}

/// A proposed roster change plus the snapshot facts needed to judge it.
///
/// All fields come from one consistent view of ledger state; the caller is
/// responsible for reading them inside the same transaction that will apply
/// the change.
#[derive(Clone, Debug)]
pub struct AdmissionRequest<'a> {
    pub league: &'a League,
    pub team: &'a Team,
    pub player: &'a Player,
    /// The team's current assignment count.
    pub roster_size: usize,
    /// The player's existing assignment to any team of this league, if any.
    pub league_assignment: Option<&'a Assignment>,
    pub trade: TradeKind,
}

// ---------------------------------------------------------------------------
// RejectReason / Admission
// ---------------------------------------------------------------------------

/// Why a proposed roster change was turned down.
///
/// The `Display` form is the exact caller-facing message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    RosterFull,
    PlayerUnavailable,
    InsufficientFunds,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::RosterFull => write!(f, "Team is full"),
            RejectReason::PlayerUnavailable => {
                write!(f, "Player is already on another team in this league")
            }
            RejectReason::InsufficientFunds => write!(f, "Insufficient funds"),
        }
    }
}

/// The engine's verdict on a proposed roster change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    Admit,
    Reject(RejectReason),
}

impl Admission {
    /// Returns `true` if the change was admitted.
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admit)
    }

    /// The rejection reason, if any.
    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            Admission::Admit => None,
            Admission::Reject(reason) => Some(*reason),
        }
    }
}

// ---------------------------------------------------------------------------
// AdmissionCheck trait
// ---------------------------------------------------------------------------

/// One named check in the admission pipeline.
///
/// Checks are pure: they inspect the request and either pass (`None`) or
/// name the reason to reject. They never fault and never mutate anything.
pub trait AdmissionCheck: Send + Sync {
    /// Short name for logs and diagnostics (e.g. "capacity").
    fn name(&self) -> &'static str;

    fn evaluate(&self, request: &AdmissionRequest<'_>) -> Option<RejectReason>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_messages_are_caller_facing() {
        assert_eq!(RejectReason::RosterFull.to_string(), "Team is full");
        assert_eq!(
            RejectReason::PlayerUnavailable.to_string(),
            "Player is already on another team in this league"
        );
        assert_eq!(
            RejectReason::InsufficientFunds.to_string(),
            "Insufficient funds"
        );
    }

    #[test]
    fn admission_helpers() {
        assert!(Admission::Admit.is_admitted());
        assert_eq!(Admission::Admit.reject_reason(), None);

        let reject = Admission::Reject(RejectReason::RosterFull);
        assert!(!reject.is_admitted());
        assert_eq!(reject.reject_reason(), Some(RejectReason::RosterFull));
    }

    #[test]
    fn reject_reason_serde_roundtrip() {
        let reason = RejectReason::PlayerUnavailable;
        let json = serde_json::to_string(&reason).unwrap();
        let parsed: RejectReason = serde_json::from_str(&json).unwrap();
        assert_eq!(reason, parsed);
    }
}
