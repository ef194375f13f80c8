use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::PlayerId;
use crate::role::Role;

/// A real-world competitor tradable on the market.
///
/// `external_id` is the source-of-truth identity from the upstream data
/// provider; `team_name` is the player's real-world organization, unrelated
/// to fantasy [`Team`](crate::Team)s.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub external_id: String,
    pub name: String,
    pub role: Role,
    pub team_name: String,
    /// Acquisition price in whole currency units.
    pub price: u64,
    pub created_at: DateTime<Utc>,
}

impl Player {
    pub fn new(
        external_id: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        team_name: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            id: PlayerId::new(),
            external_id: external_id.into(),
            name: name.into(),
            role,
            team_name: team_name.into(),
            price,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_keeps_fields() {
        let player = Player::new("LPL-1234", "Faker", Role::Mid, "T1", 1_430_000);
        assert_eq!(player.external_id, "LPL-1234");
        assert_eq!(player.role, Role::Mid);
        assert_eq!(player.price, 1_430_000);
    }

    #[test]
    fn serde_roundtrip() {
        let player = Player::new("ext", "Keria", Role::Support, "T1", 900_000);
        let json = serde_json::to_string(&player).unwrap();
        let parsed: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, parsed);
    }
}
