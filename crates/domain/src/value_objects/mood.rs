//! Creature mood and the animation it drives
//!
//! - Mood: persisted emotional state, recomputed after every gauge change
//! - Animation: the idle loop the client plays for a mood (1:1 mapping),
//!   plus the one-shot `Evolving` cue which no mood maps to

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::Gauges;

/// Emotional state derived from the live gauges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// A need is critical
    Sick,
    Hungry,
    Sleepy,
    /// Dirty and annoyed about it
    Frustrated,
    /// Bond has run low
    Lonely,
    /// High bond and high energy
    Joyful,
    Excited,
    Playful,
    /// Nothing stands out
    #[default]
    Happy,
}

impl Mood {
    /// Get all moods in classification priority order
    pub fn all() -> &'static [Mood] {
        &[
            Mood::Sick,
            Mood::Hungry,
            Mood::Sleepy,
            Mood::Frustrated,
            Mood::Lonely,
            Mood::Joyful,
            Mood::Excited,
            Mood::Playful,
            Mood::Happy,
        ]
    }

    /// Classify the gauges into a mood.
    ///
    /// Rules are evaluated top to bottom and the first match wins, so a
    /// critical need always dominates a happy one.
    pub fn classify(gauges: &Gauges) -> Self {
        let hunger = gauges.hunger.value();
        let energy = gauges.energy.value();
        let cleanliness = gauges.cleanliness.value();
        let bond = gauges.bond.value();

        if hunger > 90 || energy < 10 || cleanliness < 10 {
            Mood::Sick
        } else if hunger > 70 {
            Mood::Hungry
        } else if energy < 30 {
            Mood::Sleepy
        } else if cleanliness < 30 {
            Mood::Frustrated
        } else if bond < 30 {
            Mood::Lonely
        } else if bond >= 80 && energy >= 70 {
            Mood::Joyful
        } else if bond >= 60 && energy >= 50 {
            Mood::Excited
        } else if energy >= 80 {
            Mood::Playful
        } else {
            Mood::Happy
        }
    }

    /// The idle animation for this mood
    pub fn animation(&self) -> Animation {
        match self {
            Mood::Happy => Animation::Idle,
            Mood::Joyful => Animation::Happy,
            Mood::Excited => Animation::Excited,
            Mood::Playful => Animation::Happy,
            Mood::Hungry => Animation::Hungry,
            Mood::Sleepy => Animation::Sleep,
            Mood::Sick => Animation::Sick,
            Mood::Frustrated | Mood::Lonely => Animation::Sad,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Mood::Sick => "Sick",
            Mood::Hungry => "Hungry",
            Mood::Sleepy => "Sleepy",
            Mood::Frustrated => "Frustrated",
            Mood::Lonely => "Lonely",
            Mood::Joyful => "Joyful",
            Mood::Excited => "Excited",
            Mood::Playful => "Playful",
            Mood::Happy => "Happy",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Mood {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::all()
            .iter()
            .copied()
            .find(|mood| mood.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown mood: {}", s)))
    }
}

/// Animation loop shown by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Animation {
    #[default]
    Idle,
    Happy,
    Excited,
    Hungry,
    Sleep,
    Sick,
    Sad,
    /// One-shot cue played when a growth stage changes
    Evolving,
}

impl Animation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Animation::Idle => "idle",
            Animation::Happy => "happy",
            Animation::Excited => "excited",
            Animation::Hungry => "hungry",
            Animation::Sleep => "sleep",
            Animation::Sick => "sick",
            Animation::Sad => "sad",
            Animation::Evolving => "evolving",
        }
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_hunger_dominates() {
        assert_eq!(Mood::classify(&Gauges::new(95, 50, 50, 50)), Mood::Sick);
    }

    #[test]
    fn critical_energy_or_cleanliness_is_sick() {
        assert_eq!(Mood::classify(&Gauges::new(20, 9, 90, 90)), Mood::Sick);
        assert_eq!(Mood::classify(&Gauges::new(20, 90, 9, 90)), Mood::Sick);
    }

    #[test]
    fn high_energy_without_bond_is_playful() {
        assert_eq!(Mood::classify(&Gauges::new(20, 85, 90, 50)), Mood::Playful);
    }

    #[test]
    fn high_bond_and_energy_is_joyful() {
        assert_eq!(Mood::classify(&Gauges::new(20, 75, 90, 85)), Mood::Joyful);
    }

    #[test]
    fn priority_order_for_needs() {
        assert_eq!(Mood::classify(&Gauges::new(71, 20, 20, 10)), Mood::Hungry);
        assert_eq!(Mood::classify(&Gauges::new(70, 29, 20, 10)), Mood::Sleepy);
        assert_eq!(Mood::classify(&Gauges::new(70, 30, 29, 10)), Mood::Frustrated);
        assert_eq!(Mood::classify(&Gauges::new(70, 30, 30, 29)), Mood::Lonely);
    }

    #[test]
    fn excited_and_default_happy() {
        assert_eq!(Mood::classify(&Gauges::new(30, 50, 60, 60)), Mood::Excited);
        assert_eq!(Mood::classify(&Gauges::new(30, 49, 60, 60)), Mood::Happy);
    }

    #[test]
    fn classification_is_pure() {
        let gauges = Gauges::new(40, 65, 55, 72);
        let first = Mood::classify(&gauges);
        for _ in 0..10 {
            assert_eq!(Mood::classify(&gauges), first);
        }
    }

    #[test]
    fn every_mood_maps_to_an_idle_animation() {
        assert_eq!(Mood::Happy.animation(), Animation::Idle);
        assert_eq!(Mood::Sleepy.animation(), Animation::Sleep);
        assert_eq!(Mood::Lonely.animation(), Animation::Sad);
        assert!(Mood::all()
            .iter()
            .all(|mood| mood.animation() != Animation::Evolving));
    }

    #[test]
    fn test_mood_parse() {
        assert_eq!("joyful".parse::<Mood>().unwrap(), Mood::Joyful);
        assert_eq!("SICK".parse::<Mood>().unwrap(), Mood::Sick);
        assert!("grumpy".parse::<Mood>().is_err());
    }
}
