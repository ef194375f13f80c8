//! Transfer market coordinator for the rift fantasy league.
//!
//! [`MarketService`] owns the buy/sell contract: each trade runs its
//! lookups, its roster-engine admission, and its writes inside a single
//! store transaction, so the assignment change and the budget delta commit
//! as one unit and two buyers racing for the same player can never both
//! win. Business rejections come back as [`TradeOutcome`] values, not
//! errors; only contract and storage faults are `Err`.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use rift_market::MarketService;
//! use rift_store::{InMemoryLedgerStore, LedgerStore, WriteOp};
//! use rift_types::{League, Player, Role, Team, UserId};
//!
//! let store = Arc::new(InMemoryLedgerStore::new());
//! let league = League::new("Split", "s14", UserId::new(), 10, 8, 1_000_000);
//! let team = Team::new(league.id, league.owner_id, "Owner's Team", league.budget);
//! let player = Player::new("ext", "Caps", Role::Mid, "G2 Esports", 800_000);
//! store
//!     .transact(&mut |_| Ok(vec![
//!         WriteOp::CreateLeague(league.clone()),
//!         WriteOp::CreateTeam(team.clone()),
//!         WriteOp::CreatePlayer(player.clone()),
//!     ]))
//!     .unwrap();
//!
//! let market = MarketService::new(store);
//! let outcome = market.buy_player(team.id, player.id).unwrap();
//! assert!(outcome.success);
//! ```

pub mod error;
pub mod outcome;
pub mod service;

pub use error::{MarketError, MarketResult};
pub use outcome::TradeOutcome;
pub use service::MarketService;
