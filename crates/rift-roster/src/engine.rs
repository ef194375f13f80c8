use crate::check::{Admission, AdmissionCheck, AdmissionRequest};
use crate::checks::{BudgetCheck, CapacityCheck, ExclusivityCheck};

/// The roster engine: an ordered, fail-fast pipeline of admission checks.
///
/// Check order is load-bearing — the first failing check is the rejection
/// reason the end user sees, so capacity outranks exclusivity, which
/// outranks budget.
pub struct RosterEngine {
    checks: Vec<Box<dyn AdmissionCheck>>,
}

impl RosterEngine {
    /// Create an engine with an empty pipeline. Use [`Self::add_check`] to
    /// populate it, or [`Self::with_default_checks`] for the standard order.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// The standard pipeline: capacity -> exclusivity -> budget.
    pub fn with_default_checks() -> Self {
        let mut engine = Self::new();
        engine.add_check(Box::new(CapacityCheck));
        engine.add_check(Box::new(ExclusivityCheck));
        engine.add_check(Box::new(BudgetCheck));
        engine
    }

    /// Append a check to the end of the pipeline.
    pub fn add_check(&mut self, check: Box<dyn AdmissionCheck>) {
        self.checks.push(check);
    }

    /// Number of checks in the pipeline.
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Evaluate a proposed roster change. Pure; first failure wins.
    pub fn evaluate(&self, request: &AdmissionRequest<'_>) -> Admission {
        for check in &self.checks {
            if let Some(reason) = check.evaluate(request) {
                return Admission::Reject(reason);
            }
        }
        Admission::Admit
    }
}

impl Default for RosterEngine {
    fn default() -> Self {
        Self::with_default_checks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{RejectReason, TradeKind};
    use rift_types::{Assignment, League, Player, Role, Team, TeamId, UserId};

    struct Fixture {
        league: League,
        team: Team,
        player: Player,
    }

    fn fixture() -> Fixture {
        let league = League::new("Split", "s14", UserId::new(), 10, 2, 1_000);
        let team = Team::new(league.id, league.owner_id, "Owner's Team", 1_000);
        let player = Player::new("ext", "Chovy", Role::Mid, "Gen.G", 400);
        Fixture {
            league,
            team,
            player,
        }
    }

    fn buy_request(f: &Fixture) -> AdmissionRequest<'_> {
        AdmissionRequest {
            league: &f.league,
            team: &f.team,
            player: &f.player,
            roster_size: 0,
            league_assignment: None,
            trade: TradeKind::Buy,
        }
    }

    // -----------------------------------------------------------------------
    // Happy path
    // -----------------------------------------------------------------------

    #[test]
    fn admits_a_clean_buy() {
        let f = fixture();
        let engine = RosterEngine::with_default_checks();
        assert!(engine.evaluate(&buy_request(&f)).is_admitted());
    }

    // -----------------------------------------------------------------------
    // Individual checks
    // -----------------------------------------------------------------------

    #[test]
    fn rejects_when_roster_is_full() {
        let f = fixture();
        let engine = RosterEngine::with_default_checks();
        let mut request = buy_request(&f);
        request.roster_size = 2; // cap is 2
        assert_eq!(
            engine.evaluate(&request).reject_reason(),
            Some(RejectReason::RosterFull)
        );
    }

    #[test]
    fn rejects_when_player_is_taken_in_league() {
        let f = fixture();
        let engine = RosterEngine::with_default_checks();
        let taken = Assignment::new(TeamId::new(), f.player.id);
        let mut request = buy_request(&f);
        request.league_assignment = Some(&taken);
        assert_eq!(
            engine.evaluate(&request).reject_reason(),
            Some(RejectReason::PlayerUnavailable)
        );
    }

    #[test]
    fn rejects_when_funds_are_insufficient() {
        let mut f = fixture();
        f.team.budget = 399; // price is 400
        let engine = RosterEngine::with_default_checks();
        assert_eq!(
            engine.evaluate(&buy_request(&f)).reject_reason(),
            Some(RejectReason::InsufficientFunds)
        );
    }

    #[test]
    fn exact_budget_is_sufficient() {
        let mut f = fixture();
        f.team.budget = 400;
        let engine = RosterEngine::with_default_checks();
        assert!(engine.evaluate(&buy_request(&f)).is_admitted());
    }

    #[test]
    fn budget_is_not_checked_for_sells() {
        let mut f = fixture();
        f.team.budget = 0;
        let engine = RosterEngine::with_default_checks();
        let mut request = buy_request(&f);
        request.trade = TradeKind::Sell;
        assert!(engine.evaluate(&request).is_admitted());
    }

    // -----------------------------------------------------------------------
    // Ordering: first failing check is the reported reason
    // -----------------------------------------------------------------------

    #[test]
    fn capacity_outranks_exclusivity_and_budget() {
        let mut f = fixture();
        f.team.budget = 0; // budget would also fail
        let taken = Assignment::new(TeamId::new(), f.player.id);
        let engine = RosterEngine::with_default_checks();
        let mut request = buy_request(&f);
        request.roster_size = 2; // capacity fails first
        request.league_assignment = Some(&taken); // exclusivity would also fail
        assert_eq!(
            engine.evaluate(&request).reject_reason(),
            Some(RejectReason::RosterFull)
        );
    }

    #[test]
    fn exclusivity_outranks_budget() {
        let mut f = fixture();
        f.team.budget = 0;
        let taken = Assignment::new(TeamId::new(), f.player.id);
        let engine = RosterEngine::with_default_checks();
        let mut request = buy_request(&f);
        request.league_assignment = Some(&taken);
        assert_eq!(
            engine.evaluate(&request).reject_reason(),
            Some(RejectReason::PlayerUnavailable)
        );
    }

    // -----------------------------------------------------------------------
    // Pipeline composition
    // -----------------------------------------------------------------------

    #[test]
    fn empty_pipeline_admits_everything() {
        let f = fixture();
        let engine = RosterEngine::new();
        assert_eq!(engine.check_count(), 0);
        let mut request = buy_request(&f);
        request.roster_size = 99;
        assert!(engine.evaluate(&request).is_admitted());
    }

    #[test]
    fn custom_check_integration() {
        struct NoSupportPlayers;
        impl crate::check::AdmissionCheck for NoSupportPlayers {
            fn name(&self) -> &'static str {
                "no-supports"
            }
            fn evaluate(&self, request: &AdmissionRequest<'_>) -> Option<RejectReason> {
                (request.player.role == Role::Support).then_some(RejectReason::PlayerUnavailable)
            }
        }

        let mut f = fixture();
        f.player = Player::new("ext2", "Keria", Role::Support, "T1", 100);
        let mut engine = RosterEngine::with_default_checks();
        engine.add_check(Box::new(NoSupportPlayers));
        assert!(!engine.evaluate(&buy_request(&f)).is_admitted());
    }

    #[test]
    fn default_is_standard_pipeline() {
        assert_eq!(RosterEngine::default().check_count(), 3);
    }
}
