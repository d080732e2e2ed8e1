//! Level progression

use serde::{Deserialize, Serialize};

/// XP needed to advance out of `level`.
///
/// Linear in the level, so every level costs more than the one before it.
pub fn xp_for_level(level: u32) -> u64 {
    u64::from(level.max(1)) * 100
}

/// Result of resolving pending XP against the level curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelUp {
    pub did_level_up: bool,
    pub new_level: u32,
    pub remaining_xp: u64,
}

impl LevelUp {
    /// Spend `xp` on as many levels as it covers.
    ///
    /// Reaching the threshold exactly counts as a level-up. One large XP gain
    /// can cross several levels; the loop always terminates because each
    /// iteration consumes at least 100 XP.
    pub fn resolve(level: u32, xp: u64) -> Self {
        let start = level.max(1);
        let mut level = start;
        let mut xp = xp;

        while xp >= xp_for_level(level) {
            xp -= xp_for_level(level);
            level = level.saturating_add(1);
        }

        Self {
            did_level_up: level > start,
            new_level: level,
            remaining_xp: xp,
        }
    }

    pub fn levels_gained(&self, from: u32) -> u32 {
        self.new_level.saturating_sub(from.max(1))
    }
}
