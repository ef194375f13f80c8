//! Roster admission engine for the rift fantasy league.
//!
//! The engine answers one question: may this trade change this team's
//! roster? It is a pure decision pipeline over a consistent snapshot of
//! league state — no side effects, no storage access, no faults. The
//! market coordinator gathers the snapshot facts, runs the pipeline, and
//! owns what happens next.
//!
//! Checks run in a fixed order and fail fast; the first failing check is
//! the reported rejection reason:
//!
//! 1. capacity — the team's roster is below the league's cap;
//! 2. exclusivity — the player is not already owned within the league;
//! 3. budget — the team can afford the player (buys only).
//!
//! # Quick Start
//!
//! ```rust
//! use rift_roster::{AdmissionRequest, RosterEngine, TradeKind};
//! use rift_types::{League, Player, Role, Team, UserId};
//!
//! let league = League::new("Split", "s14", UserId::new(), 10, 8, 1_000);
//! let team = Team::new(league.id, league.owner_id, "Owner's Team", 1_000);
//! let player = Player::new("ext", "Faker", Role::Mid, "T1", 400);
//!
//! let engine = RosterEngine::with_default_checks();
//! let admission = engine.evaluate(&AdmissionRequest {
//!     league: &league,
//!     team: &team,
//!     player: &player,
//!     roster_size: 0,
//!     league_assignment: None,
//!     trade: TradeKind::Buy,
//! });
//! assert!(admission.is_admitted());
//! ```

pub mod check;
pub mod checks;
pub mod engine;

pub use check::{Admission, AdmissionCheck, AdmissionRequest, RejectReason, TradeKind};
pub use checks::{BudgetCheck, CapacityCheck, ExclusivityCheck};
pub use engine::RosterEngine;
