use rift_store::StoreError;

/// Faults from market operations.
///
/// Business rejections (full roster, insufficient funds, player taken) are
/// not here — they are [`TradeOutcome`](crate::TradeOutcome) values, since
/// the caller routinely shows them to the end user and carries on.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    /// A trade referenced a team or player id that does not exist. The
    /// boundary layer guarantees ids it passes in resolve, so this is a
    /// contract fault, not a rejection.
    #[error("Team or player not found")]
    TeamOrPlayerNotFound,

    /// The store failed; propagated unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for market operations.
pub type MarketResult<T> = Result<T, MarketError>;
