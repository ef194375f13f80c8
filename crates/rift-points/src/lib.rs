//! Scoring and pricing tables for the rift fantasy league.
//!
//! Everything here is a pure function over the closed [`Role`] enum and a
//! handful of fixed constants — no storage, no I/O. The scoring subsystem
//! applies these to match data elsewhere; the market only needs the prices
//! this crate produces at ingestion time.
//!
//! [`Role`]: rift_types::Role

pub mod modifier;
pub mod pricing;
pub mod scoring;

pub use modifier::{point_modifier, price_modifier, TeamTier};
pub use pricing::{initial_price, BASE_PRICE};
pub use scoring::{MatchStats, ScoreCalculator};
