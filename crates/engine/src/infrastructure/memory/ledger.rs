//! In-memory coin balances.

use async_trait::async_trait;
use blipkin_domain::OwnerId;
use dashmap::DashMap;

use crate::infrastructure::ports::{CoinSource, CurrencyLedger, RepoError};

#[derive(Default)]
pub struct InMemoryLedger {
    balances: DashMap<OwnerId, u64>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CurrencyLedger for InMemoryLedger {
    async fn credit(
        &self,
        owner_id: OwnerId,
        amount: u64,
        source: CoinSource,
    ) -> Result<u64, RepoError> {
        let mut balance = self.balances.entry(owner_id).or_insert(0);
        *balance = balance.saturating_add(amount);
        tracing::trace!(owner_id = %owner_id, amount, ?source, balance = *balance, "Coins credited");
        Ok(*balance)
    }

    async fn balance(&self, owner_id: OwnerId) -> Result<u64, RepoError> {
        Ok(self.balances.get(&owner_id).map(|b| *b).unwrap_or(0))
    }
}
