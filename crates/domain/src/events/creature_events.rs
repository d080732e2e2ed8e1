//! Creature simulation events
//!
//! Returned alongside the updated snapshot so callers (economy, logging,
//! presentation) can react to what happened without diffing snapshots.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::value_objects::{ActionKind, Animation, Gauge, GrowthStage, MegaForm, MiniGame};

/// A growth-stage transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evolution {
    pub from: GrowthStage,
    pub to: GrowthStage,
    /// Only present when the transition entered `Mega`
    pub mega_form: Option<MegaForm>,
}

/// Play was refused because the creature is exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestNeeded {
    /// This attempt put the creature to rest
    pub started_resting: bool,
    pub retry_after_ms: i64,
}

impl RestNeeded {
    pub fn retry_after(&self) -> Duration {
        Duration::milliseconds(self.retry_after_ms)
    }
}

/// Result of one owner action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOutcome {
    pub kind: ActionKind,
    pub xp_gained: u64,
    pub bond_gained: i64,
    pub coins_earned: u64,
    pub leveled_up: bool,
    pub levels_gained: u32,
    pub evolution: Option<Evolution>,
    /// Set when the action was rejected by the rest cooldown
    pub rest: Option<RestNeeded>,
    /// One-shot animation for the client to play
    pub cue: Animation,
}

impl ActionOutcome {
    pub(crate) fn rejected(kind: ActionKind, rest: RestNeeded, cue: Animation) -> Self {
        Self {
            kind,
            xp_gained: 0,
            bond_gained: 0,
            coins_earned: 0,
            leveled_up: false,
            levels_gained: 0,
            evolution: None,
            rest: Some(rest),
            cue,
        }
    }

    pub fn evolved(&self) -> bool {
        self.evolution.is_some()
    }

    pub fn rest_needed(&self) -> bool {
        self.rest.is_some()
    }

    pub fn rest_remaining_ms(&self) -> Option<i64> {
        self.rest.map(|rest| rest.retry_after_ms)
    }
}

/// What the reconciler changed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecayReport {
    pub hours_elapsed: f64,
    pub hunger_gained: i64,
    pub energy_lost: i64,
    pub cleanliness_lost: i64,
    /// Feeds short of the daily target when the window closed
    pub missed_feeds: u32,
    pub feed_penalty: i64,
}

/// Result of a session check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub missed_you: bool,
    pub can_evolve: bool,
}

/// Result of an external energy grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyGrant {
    pub amount: u32,
    pub energy_before: Gauge,
    pub energy_after: Gauge,
    /// A rest cooldown was cut short
    pub ended_rest: bool,
}

/// Result of a mini-game submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniGameOutcome {
    pub game: MiniGame,
    pub score: u64,
    pub xp_gained: u64,
    pub coins_earned: u64,
    pub leveled_up: bool,
    pub levels_gained: u32,
    pub evolution: Option<Evolution>,
}
