//! Global promotions and the multipliers they contribute
//!
//! The set of active promotions is owned by an outside collaborator. The
//! engine only ever sees the folded [`EventMultipliers`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::ActionKind;

/// Known global event keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromotionKey {
    /// Double XP from all actions
    MotivationMonday,
    /// Alias used by mini-game payouts
    DoubleXp,
    /// 1.5x XP when feeding
    FeedingFrenzy,
    /// Double coins from all activities
    FunFriday,
    BonusCoins,
    /// Double rest effectiveness
    ChillSunday,
    /// Double bond gain
    HappinessWeek,
    /// Recognised, leaves every multiplier untouched
    EvolutionSurge,
    /// Social presence payouts, not a creature concern
    BlipkinParty,
}

impl PromotionKey {
    pub fn all() -> [PromotionKey; 9] {
        [
            PromotionKey::MotivationMonday,
            PromotionKey::DoubleXp,
            PromotionKey::FeedingFrenzy,
            PromotionKey::FunFriday,
            PromotionKey::BonusCoins,
            PromotionKey::ChillSunday,
            PromotionKey::HappinessWeek,
            PromotionKey::EvolutionSurge,
            PromotionKey::BlipkinParty,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PromotionKey::MotivationMonday => "MOTIVATION_MONDAY",
            PromotionKey::DoubleXp => "DOUBLE_XP",
            PromotionKey::FeedingFrenzy => "FEEDING_FRENZY",
            PromotionKey::FunFriday => "FUN_FRIDAY",
            PromotionKey::BonusCoins => "BONUS_COINS",
            PromotionKey::ChillSunday => "CHILL_SUNDAY",
            PromotionKey::HappinessWeek => "HAPPINESS_WEEK",
            PromotionKey::EvolutionSurge => "EVOLUTION_SURGE",
            PromotionKey::BlipkinParty => "BLIPKIN_PARTY",
        }
    }
}

impl fmt::Display for PromotionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PromotionKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown promotion key: {}", s)))
    }
}

/// Multipliers applied to raw deltas before leveling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventMultipliers {
    pub xp: f64,
    pub coins: f64,
    pub bond: f64,
    /// Extra XP factor for feeding only
    pub feed_xp: f64,
    /// Factor on the energy a rest restores
    pub rest_energy: f64,
}

impl Default for EventMultipliers {
    fn default() -> Self {
        Self::none()
    }
}

impl EventMultipliers {
    pub fn none() -> Self {
        Self {
            xp: 1.0,
            coins: 1.0,
            bond: 1.0,
            feed_xp: 1.0,
            rest_energy: 1.0,
        }
    }

    /// Fold active promotions. Each bonus applies once, so keys that grant
    /// the same bonus (`MOTIVATION_MONDAY` and `DOUBLE_XP`) do not stack.
    pub fn from_promotions<'a>(keys: impl IntoIterator<Item = &'a PromotionKey>) -> Self {
        let mut multipliers = Self::none();

        for key in keys {
            match key {
                PromotionKey::MotivationMonday | PromotionKey::DoubleXp => multipliers.xp = 2.0,
                PromotionKey::FeedingFrenzy => multipliers.feed_xp = 1.5,
                PromotionKey::FunFriday | PromotionKey::BonusCoins => multipliers.coins = 2.0,
                PromotionKey::ChillSunday => multipliers.rest_energy = 2.0,
                PromotionKey::HappinessWeek => multipliers.bond = 2.0,
                PromotionKey::EvolutionSurge | PromotionKey::BlipkinParty => {}
            }
        }

        multipliers
    }

    /// Total XP factor for an action kind
    pub fn xp_for(&self, kind: ActionKind) -> f64 {
        match kind {
            ActionKind::Feed => self.xp * self.feed_xp,
            _ => self.xp,
        }
    }
}

/// Scale a raw non-negative amount, flooring to an integer.
pub fn scale_floor(raw: u64, factor: f64) -> u64 {
    let scaled = (raw as f64 * factor.max(0.0)).floor();
    if scaled >= u64::MAX as f64 {
        u64::MAX
    } else {
        scaled as u64
    }
}

/// Scale a signed delta, flooring toward negative infinity.
pub fn scale_signed(raw: i64, factor: f64) -> i64 {
    (raw as f64 * factor.max(0.0)).floor() as i64
}
