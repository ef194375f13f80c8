use serde::{Deserialize, Serialize};

use rift_types::Role;

use crate::modifier::point_modifier;

/// One player's line from one match.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub cs: u32,
    pub victory: bool,
}

/// The fixed fantasy-point formula.
///
/// Kills +3, deaths -1, assists +1, creep score +0.02 each, +2 for a win,
/// +2 bonus when KDA reaches 3. Results are rounded to two decimals so
/// accumulated team points stay display-stable.
#[derive(Default)]
pub struct ScoreCalculator;

impl ScoreCalculator {
    const KILL: f64 = 3.0;
    const DEATH: f64 = -1.0;
    const ASSIST: f64 = 1.0;
    const CS: f64 = 0.02;
    const VICTORY: f64 = 2.0;
    const KDA_BONUS: f64 = 2.0;
    const KDA_BONUS_THRESHOLD: f64 = 3.0;

    pub fn new() -> Self {
        Self
    }

    /// Points for a single match line.
    pub fn points(&self, stats: &MatchStats) -> f64 {
        let mut points = f64::from(stats.kills) * Self::KILL
            + f64::from(stats.deaths) * Self::DEATH
            + f64::from(stats.assists) * Self::ASSIST
            + f64::from(stats.cs) * Self::CS;

        if stats.victory {
            points += Self::VICTORY;
        }
        if Self::kda(stats) >= Self::KDA_BONUS_THRESHOLD {
            points += Self::KDA_BONUS;
        }

        round2(points)
    }

    /// Summed points over a batch of match lines.
    pub fn batch_points(&self, stats: &[MatchStats]) -> f64 {
        round2(stats.iter().map(|s| self.points(s)).sum())
    }

    /// Apply the role modifier table to already-computed points.
    pub fn role_adjusted(&self, points: f64, role: Role) -> f64 {
        round2(points * point_modifier(role))
    }

    /// KDA with the deathless case clamped to one death.
    fn kda(stats: &MatchStats) -> f64 {
        f64::from(stats.kills + stats.assists) / f64::from(stats.deaths.max(1))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stats(kills: u32, deaths: u32, assists: u32, cs: u32, victory: bool) -> MatchStats {
        MatchStats {
            kills,
            deaths,
            assists,
            cs,
            victory,
        }
    }

    #[test]
    fn base_points_add_up() {
        let calc = ScoreCalculator::new();
        // 2 kills (6) - 3 deaths (3) + 4 assists (4) + 150 cs (3) = 10,
        // KDA = 2, no bonus, no win.
        assert_eq!(calc.points(&stats(2, 3, 4, 150, false)), 10.0);
    }

    #[test]
    fn victory_bonus_applies() {
        let calc = ScoreCalculator::new();
        let lost = calc.points(&stats(2, 3, 4, 150, false));
        let won = calc.points(&stats(2, 3, 4, 150, true));
        assert_eq!(won - lost, 2.0);
    }

    #[test]
    fn kda_bonus_at_threshold() {
        let calc = ScoreCalculator::new();
        // KDA = (5 + 4) / 3 = 3.0 exactly: 15 - 3 + 4 + 2 = 18.
        assert_eq!(calc.points(&stats(5, 3, 4, 0, false)), 18.0);
        // KDA = (5 + 3) / 3 < 3: 15 - 3 + 3 = 15, no bonus.
        assert_eq!(calc.points(&stats(5, 3, 3, 0, false)), 15.0);
    }

    #[test]
    fn deathless_game_counts_one_death_for_kda() {
        let calc = ScoreCalculator::new();
        // 1 kill, 2 assists, 0 deaths: KDA = 3/1 = 3 -> bonus.
        // 3 + 2 + 2 = 7
        assert_eq!(calc.points(&stats(1, 0, 2, 0, false)), 7.0);
    }

    #[test]
    fn points_round_to_two_decimals() {
        let calc = ScoreCalculator::new();
        let p = calc.points(&stats(0, 0, 0, 7, false));
        assert_eq!(p, 0.14);
    }

    #[test]
    fn batch_is_sum_of_lines() {
        let calc = ScoreCalculator::new();
        let lines = [stats(2, 3, 4, 150, false), stats(1, 0, 2, 0, false)];
        assert_eq!(
            calc.batch_points(&lines),
            calc.points(&lines[0]) + calc.points(&lines[1])
        );
    }

    #[test]
    fn role_adjustment_uses_table() {
        let calc = ScoreCalculator::new();
        assert_eq!(calc.role_adjusted(10.0, rift_types::Role::Bot), 11.5);
        assert_eq!(calc.role_adjusted(10.0, rift_types::Role::Support), 9.0);
    }

    proptest! {
        #[test]
        fn points_are_finite_and_rounded(
            kills in 0u32..40,
            deaths in 0u32..40,
            assists in 0u32..60,
            cs in 0u32..600,
            victory in proptest::bool::ANY,
        ) {
            let calc = ScoreCalculator::new();
            let p = calc.points(&stats(kills, deaths, assists, cs, victory));
            prop_assert!(p.is_finite());
            prop_assert_eq!((p * 100.0).round() / 100.0, p);
        }
    }
}
