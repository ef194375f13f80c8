//! Transactional ledger store for the rift fantasy league.
//!
//! The store is the single durable record of leagues, teams, players, and
//! player-on-team assignments, and the sole concurrency-safety mechanism of
//! the whole engine: every mutation goes through [`LedgerStore::transact`],
//! which runs the caller's decision logic against a serializable view of
//! state and applies the returned ops as one atomic unit.
//!
//! Business rules (roster caps, scarcity, budgets as policy) live in the
//! market and league services. The store only enforces referential
//! integrity: no team without its league, no assignment without its team
//! and player, no team budget below zero, no deleting a league that still
//! has teams.
//!
//! # Quick Start
//!
//! ```rust
//! use rift_store::{InMemoryLedgerStore, LedgerStore, WriteOp};
//! use rift_types::{League, Team, UserId};
//!
//! let store = InMemoryLedgerStore::new();
//! let owner = UserId::new();
//! let league = League::new("Summer Split", "s14", owner, 10, 8, 100);
//! let team = Team::new(league.id, owner, "Owner's Team", league.budget);
//!
//! store
//!     .transact(&mut |_view| Ok(vec![
//!         WriteOp::CreateLeague(league.clone()),
//!         WriteOp::CreateTeam(team.clone()),
//!     ]))
//!     .unwrap();
//! ```

pub mod error;
pub mod memory;
pub mod op;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryLedgerStore;
pub use op::WriteOp;
pub use traits::{LedgerStore, StateView, TxnBody};
