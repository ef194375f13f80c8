use rift_types::Role;

use crate::modifier::{price_modifier, TeamTier};

/// Base acquisition price before any modifier, in whole currency units.
pub const BASE_PRICE: u64 = 1_000_000;

/// Initial market price for a player at ingestion time.
///
/// `BASE_PRICE` scaled by the role table, the real-world team tier, and a
/// performance multiplier: career KDA boosts the price by up to 50%
/// (`1 + min(kda / 5, 0.5)`). Rounded to whole currency units — prices are
/// integers everywhere in the market.
pub fn initial_price(role: Role, tier: TeamTier, kda: Option<f64>) -> u64 {
    let performance = 1.0 + kda.map_or(0.0, |k| (k / 5.0).min(0.5));
    let price = BASE_PRICE as f64 * price_modifier(role) * tier.multiplier() * performance;
    price.round() as u64
}
