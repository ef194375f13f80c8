//! Foundation types for the rift fantasy league engine.
//!
//! This crate provides the entity records and identifiers shared by every
//! other rift crate: leagues, teams, players, and the assignments binding a
//! player to a team. It carries no storage or business logic — the market
//! and league services own the rules, `rift-store` owns persistence.
//!
//! # Key Types
//!
//! - [`LeagueId`], [`TeamId`], [`PlayerId`], [`UserId`], [`AssignmentId`] —
//!   time-ordered (UUID v7) entity identifiers
//! - [`Role`] — the closed set of competitive roles
//! - [`League`], [`Team`], [`Player`], [`Assignment`] — ledger records

pub mod assignment;
pub mod error;
pub mod id;
pub mod league;
pub mod player;
pub mod role;
pub mod team;

pub use assignment::Assignment;
pub use error::TypeError;
pub use id::{AssignmentId, LeagueId, PlayerId, TeamId, UserId};
pub use league::League;
pub use player::Player;
pub use role::Role;
pub use team::{validate_team_name, Team, TEAM_NAME_MAX, TEAM_NAME_MIN};
