//! In-memory promotions calendar.

use async_trait::async_trait;
use blipkin_domain::PromotionKey;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{PromotionsPort, RepoError};

/// A promotion running over `[starts_at, ends_at)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromotionWindow {
    pub key: PromotionKey,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl PromotionWindow {
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.starts_at <= at && at < self.ends_at
    }
}

#[derive(Default)]
pub struct InMemoryPromotions {
    windows: RwLock<Vec<PromotionWindow>>,
}

impl InMemoryPromotions {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn schedule(&self, window: PromotionWindow) {
        self.windows.write().await.push(window);
    }
}

#[async_trait]
impl PromotionsPort for InMemoryPromotions {
    async fn active_at(&self, at: DateTime<Utc>) -> Result<Vec<PromotionKey>, RepoError> {
        Ok(self
            .windows
            .read()
            .await
            .iter()
            .filter(|window| window.is_active_at(at))
            .map(|window| window.key)
            .collect())
    }
}
