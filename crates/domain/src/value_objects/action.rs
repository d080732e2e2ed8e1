//! Owner-triggered actions and their raw rewards

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Discrete interaction an owner can perform on their creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Feed,
    Play,
    Clean,
    Rest,
    #[serde(alias = "converse")]
    Chat,
}

impl ActionKind {
    pub fn all() -> [ActionKind; 5] {
        [
            ActionKind::Feed,
            ActionKind::Play,
            ActionKind::Clean,
            ActionKind::Rest,
            ActionKind::Chat,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Feed => "feed",
            ActionKind::Play => "play",
            ActionKind::Clean => "clean",
            ActionKind::Rest => "rest",
            ActionKind::Chat => "chat",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feed" => Ok(ActionKind::Feed),
            "play" => Ok(ActionKind::Play),
            "clean" => Ok(ActionKind::Clean),
            "rest" => Ok(ActionKind::Rest),
            "chat" | "converse" => Ok(ActionKind::Chat),
            other => Err(DomainError::invalid_input(format!(
                "unknown action kind: {}",
                other
            ))),
        }
    }
}

/// An action stamped with the time it was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionEvent {
    pub kind: ActionKind,
    pub timestamp: DateTime<Utc>,
}

impl ActionEvent {
    pub fn new(kind: ActionKind, timestamp: DateTime<Utc>) -> Self {
        Self { kind, timestamp }
    }
}

/// Raw (pre-multiplier) effect of one action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionReward {
    #[serde(default)]
    pub hunger: i64,
    #[serde(default)]
    pub energy: i64,
    #[serde(default)]
    pub cleanliness: i64,
    pub xp: u64,
    pub bond: i64,
    pub coins: u64,
}

/// Reward per action kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RewardTable {
    pub feed: ActionReward,
    pub play: ActionReward,
    pub clean: ActionReward,
    pub rest: ActionReward,
    pub chat: ActionReward,
}

impl RewardTable {
    pub fn for_kind(&self, kind: ActionKind) -> &ActionReward {
        match kind {
            ActionKind::Feed => &self.feed,
            ActionKind::Play => &self.play,
            ActionKind::Clean => &self.clean,
            ActionKind::Rest => &self.rest,
            ActionKind::Chat => &self.chat,
        }
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            feed: ActionReward {
                hunger: -25,
                energy: 0,
                cleanliness: 0,
                xp: 5,
                bond: 3,
                coins: 10,
            },
            play: ActionReward {
                hunger: 0,
                energy: -10,
                cleanliness: -5,
                xp: 8,
                bond: 5,
                coins: 15,
            },
            clean: ActionReward {
                hunger: 0,
                energy: 0,
                cleanliness: 30,
                xp: 3,
                bond: 2,
                coins: 8,
            },
            rest: ActionReward {
                hunger: 0,
                energy: 30,
                cleanliness: 0,
                xp: 3,
                bond: 2,
                coins: 5,
            },
            // Conversation pays the most XP
            chat: ActionReward {
                hunger: 0,
                energy: 0,
                cleanliness: 0,
                xp: 10,
                bond: 3,
                coins: 10,
            },
        }
    }
}
