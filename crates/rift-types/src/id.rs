use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Declares a time-ordered (UUID v7) entity identifier.
///
/// All rift identifiers share the same shape: generated ids sort by
/// creation time, which gives the store a stable notion of insertion order
/// without a separate sequence counter.
macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Generate a new time-ordered id (UUID v7).
            pub fn new() -> Self {
                Self(uuid::Uuid::now_v7())
            }

            /// Create from an existing UUID.
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Parse from the canonical hyphenated form.
            pub fn parse(s: &str) -> Result<Self, TypeError> {
                uuid::Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| TypeError::InvalidId(e.to_string()))
            }

            /// The underlying UUID.
            pub fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }

            /// Short representation (prefix plus first 8 characters).
            pub fn short_id(&self) -> String {
                format!("{}:{}", $prefix, &self.0.to_string()[..8])
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.short_id())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a league.
    LeagueId,
    "lg"
);

entity_id!(
    /// Identifier of a team within a league.
    TeamId,
    "tm"
);

entity_id!(
    /// Identifier of a tradable player.
    PlayerId,
    "pl"
);

entity_id!(
    /// Identifier of a registered user. Users live in the auth subsystem;
    /// this crate only carries their id.
    UserId,
    "us"
);

entity_id!(
    /// Identifier of a player-on-team assignment.
    AssignmentId,
    "as"
);
