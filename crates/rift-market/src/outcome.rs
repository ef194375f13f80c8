use serde::{Deserialize, Serialize};

/// The caller-facing result of a buy or sell.
///
/// A rejected trade is a normal outcome: `success` is false and `message`
/// carries the reason to show the end user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOutcome {
    pub success: bool,
    pub message: String,
}

impl TradeOutcome {
    /// A completed trade.
    pub fn completed(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A rejected trade with the reason to display.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
