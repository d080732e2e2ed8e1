//! Lifetime care counters

use serde::{Deserialize, Serialize};

use crate::value_objects::ActionKind;

/// Lifetime totals per action kind. Monotonic, never reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareHistory {
    pub total_feeds: u64,
    pub total_plays: u64,
    pub total_cleans: u64,
    pub total_rests: u64,
    pub total_chats: u64,
}

impl CareHistory {
    pub fn record(&mut self, kind: ActionKind) {
        let counter = match kind {
            ActionKind::Feed => &mut self.total_feeds,
            ActionKind::Play => &mut self.total_plays,
            ActionKind::Clean => &mut self.total_cleans,
            ActionKind::Rest => &mut self.total_rests,
            ActionKind::Chat => &mut self.total_chats,
        };
        *counter = counter.saturating_add(1);
    }

    pub fn count(&self, kind: ActionKind) -> u64 {
        match kind {
            ActionKind::Feed => self.total_feeds,
            ActionKind::Play => self.total_plays,
            ActionKind::Clean => self.total_cleans,
            ActionKind::Rest => self.total_rests,
            ActionKind::Chat => self.total_chats,
        }
    }

    /// Feeds, plays, cleans and rests. Conversation does not shape the body.
    pub fn total_care(&self) -> u64 {
        self.total_feeds
            .saturating_add(self.total_plays)
            .saturating_add(self.total_cleans)
            .saturating_add(self.total_rests)
    }

    /// Every recorded action including chats.
    pub fn total_actions(&self) -> u64 {
        self.total_care().saturating_add(self.total_chats)
    }

    /// Number of action kinds used at least once (0..=5).
    pub fn distinct_kinds(&self) -> usize {
        ActionKind::all()
            .iter()
            .filter(|kind| self.count(**kind) > 0)
            .count()
    }
}
