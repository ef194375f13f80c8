use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The closed set of competitive roles a player can occupy.
///
/// External data sources report roles as uppercase strings; parsing is
/// case-insensitive but serialization always uses the uppercase form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Bot,
    Support,
}

impl Role {
    /// All roles in draft-display order.
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Bot, Role::Support];

    /// The uppercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JUNGLE",
            Role::Mid => "MID",
            Role::Bot => "BOT",
            Role::Support => "SUPPORT",
        }
    }
}

impl FromStr for Role {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TOP" => Ok(Role::Top),
            "JUNGLE" => Ok(Role::Jungle),
            "MID" => Ok(Role::Mid),
            "BOT" => Ok(Role::Bot),
            "SUPPORT" => Ok(Role::Support),
            other => Err(TypeError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
