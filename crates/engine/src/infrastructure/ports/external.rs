//! Collaborator ports outside creature storage: the coin economy and the
//! global promotions calendar.

use async_trait::async_trait;
use blipkin_domain::{ActionKind, MiniGame, OwnerId, PromotionKey};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::RepoError;

/// Why coins were credited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum CoinSource {
    Action { kind: ActionKind },
    MiniGame { game: MiniGame },
}

/// Coin balances. A pure observer of outcomes; never consulted by the
/// simulation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CurrencyLedger: Send + Sync {
    /// Add coins and return the new balance.
    async fn credit(
        &self,
        owner_id: OwnerId,
        amount: u64,
        source: CoinSource,
    ) -> Result<u64, RepoError>;

    async fn balance(&self, owner_id: OwnerId) -> Result<u64, RepoError>;
}

/// Promotions running at a point in time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PromotionsPort: Send + Sync {
    async fn active_at(&self, at: DateTime<Utc>) -> Result<Vec<PromotionKey>, RepoError>;
}
