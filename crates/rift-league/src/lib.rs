//! League membership manager for the rift fantasy league.
//!
//! [`LeagueService`] owns the league lifecycle: creation (with the owner's
//! team, atomically), joining under the capacity and one-team-per-user
//! rules, metadata updates, standings, and the explicit delete cascade
//! (assignments, then teams, then the league — storage-level cascades are
//! never assumed).
//!
//! Join rejections are [`JoinOutcome`] values with the message to show the
//! user; only contract and storage faults are `Err`.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use rift_league::{LeagueService, LeagueSpec};
//! use rift_store::InMemoryLedgerStore;
//! use rift_types::UserId;
//!
//! let store = Arc::new(InMemoryLedgerStore::new());
//! let leagues = LeagueService::new(store);
//!
//! let owner = UserId::new();
//! let (league, owner_team) = leagues
//!     .create_league(owner, LeagueSpec::new("Summer Split", "s14"))
//!     .unwrap();
//! assert_eq!(owner_team.budget, league.budget);
//!
//! let joined = leagues
//!     .join_league(UserId::new(), league.id, "The Challengers")
//!     .unwrap();
//! assert!(joined.is_joined());
//! ```

pub mod error;
pub mod outcome;
pub mod service;
pub mod spec;

pub use error::{LeagueError, LeagueResult};
pub use outcome::{JoinOutcome, JoinRejection, StandingsRow};
pub use service::LeagueService;
pub use spec::{LeaguePatch, LeagueSpec};
