//! Tunable simulation constants
//!
//! Every rate, threshold and reward the simulator uses. Defaults reproduce the
//! stock game; a partial JSON document overrides only the fields it names.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::value_objects::RewardTable;

// =============================================================================
// Decay Rates
// =============================================================================

/// Per-hour drift of the need gauges while the owner is away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecayRates {
    /// Hunger gained per hour (default: 5)
    pub hunger_per_hour: u32,
    /// Energy lost per hour (default: 3)
    pub energy_per_hour: u32,
    /// Cleanliness lost per hour (default: 2)
    pub cleanliness_per_hour: u32,
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            hunger_per_hour: 5,
            energy_per_hour: 3,
            cleanliness_per_hour: 2,
        }
    }
}

// =============================================================================
// Daily Feeding
// =============================================================================

/// The rolling feeding window and what missing feeds costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedingPolicy {
    /// Length of one feeding window in hours (default: 24)
    pub window_hours: u32,
    /// Feeds expected per window (default: 3)
    pub daily_target: u32,
    /// Energy drained per missed feed when the window closes (default: 20)
    pub missed_feed_energy_penalty: u32,
}

impl Default for FeedingPolicy {
    fn default() -> Self {
        Self {
            window_hours: 24,
            daily_target: 3,
            missed_feed_energy_penalty: 20,
        }
    }
}

// =============================================================================
// Rest Cooldown
// =============================================================================

/// When play is refused for exhaustion and how long recovery takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RestPolicy {
    /// Play is refused below this energy (default: 10)
    pub exhausted_below: u8,
    /// Forced rest duration in minutes (default: 180)
    pub cooldown_minutes: u32,
}

impl Default for RestPolicy {
    fn default() -> Self {
        Self {
            exhausted_below: 10,
            cooldown_minutes: 180,
        }
    }
}

impl RestPolicy {
    pub fn cooldown(&self) -> Duration {
        Duration::minutes(i64::from(self.cooldown_minutes))
    }
}

// =============================================================================
// Simulation Configuration
// =============================================================================

/// Every tuning constant of the creature simulation.
///
/// `Default` reproduces the live game's balance. Operators may override
/// individual fields from a JSON file; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    /// Minimum gap in minutes before decay is applied (default: 60)
    pub decay_min_interval_minutes: u32,
    pub decay: DecayRates,
    pub feeding: FeedingPolicy,
    pub rest: RestPolicy,
    /// Owner absence in hours that counts as "missed you" (default: 24)
    pub missed_you_hours: u32,
    pub rewards: RewardTable,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            decay_min_interval_minutes: 60,
            decay: DecayRates::default(),
            feeding: FeedingPolicy::default(),
            rest: RestPolicy::default(),
            missed_you_hours: 24,
            rewards: RewardTable::default(),
        }
    }
}

impl SimulationConfig {
    pub fn decay_min_interval(&self) -> Duration {
        Duration::minutes(i64::from(self.decay_min_interval_minutes))
    }

    pub fn feed_window(&self) -> Duration {
        Duration::hours(i64::from(self.feeding.window_hours))
    }

    pub fn missed_you_after(&self) -> Duration {
        Duration::hours(i64::from(self.missed_you_hours))
    }
}
