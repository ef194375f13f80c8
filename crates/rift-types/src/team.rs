use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::id::{LeagueId, TeamId, UserId};

/// Minimum team name length, inclusive.
pub const TEAM_NAME_MIN: usize = 3;
/// Maximum team name length, inclusive.
pub const TEAM_NAME_MAX: usize = 30;

/// Check a team name against the 3–30 character bound.
///
/// Length is counted in characters, not bytes, so multibyte names are not
/// penalized.
pub fn validate_team_name(name: &str) -> Result<(), TypeError> {
    let len = name.chars().count();
    if !(TEAM_NAME_MIN..=TEAM_NAME_MAX).contains(&len) {
        return Err(TypeError::InvalidTeamName { len });
    }
    Ok(())
}

/// A user's entry within one league.
///
/// `league_id` and `user_id` are immutable after creation; `budget` is
/// mutated only through market transactions; `points` is owned by the
/// scoring subsystem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub league_id: LeagueId,
    pub user_id: UserId,
    pub name: String,
    /// Remaining currency. Never negative.
    pub budget: u64,
    /// Score accumulator, written by the scoring subsystem.
    pub points: f64,
    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn new(
        league_id: LeagueId,
        user_id: UserId,
        name: impl Into<String>,
        budget: u64,
    ) -> Self {
        Self {
            id: TeamId::new(),
            league_id,
            user_id,
            name: name.into(),
            budget,
            points: 0.0,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_team_starts_with_zero_points() {
        let team = Team::new(LeagueId::new(), UserId::new(), "The Baron Stealers", 500);
        assert_eq!(team.budget, 500);
        assert_eq!(team.points, 0.0);
    }

    #[test]
    fn name_bounds_are_inclusive() {
        assert!(validate_team_name("abc").is_ok());
        assert!(validate_team_name(&"x".repeat(30)).is_ok());
        assert!(validate_team_name("ab").is_err());
        assert!(validate_team_name(&"x".repeat(31)).is_err());
        assert!(validate_team_name("").is_err());
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // Three characters, nine bytes.
        assert!(validate_team_name("ファン").is_ok());
    }

    #[test]
    fn invalid_name_reports_exact_message() {
        let err = validate_team_name("ab").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Team name must be between 3 and 30 characters"
        );
    }

    proptest! {
        #[test]
        fn validation_agrees_with_char_count(name in "\\PC{0,40}") {
            let len = name.chars().count();
            let ok = validate_team_name(&name).is_ok();
            prop_assert_eq!(ok, (TEAM_NAME_MIN..=TEAM_NAME_MAX).contains(&len));
        }
    }
}
