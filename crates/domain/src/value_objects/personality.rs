//! Personality profile - a derived view over care history and live gauges
//!
//! Never persisted as ground truth. Callers recompute it whenever they need
//! to flavor dialogue or generated journal text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{CareHistory, Gauges, GrowthStage};

const BASELINE: f64 = 50.0;

/// Dominant behavioral archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoreTrait {
    Nurturing,
    Explorer,
    Chaos,
    Calm,
}

/// Short-term emotional lean used to color replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoodBias {
    Happy,
    Tired,
    Chaotic,
    Shy,
    Bold,
}

/// How generated dialogue should sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStyle {
    ShortCute,
    Rambling,
    Wise,
    Playful,
}

impl fmt::Display for CoreTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CoreTrait::Nurturing => "NURTURING",
            CoreTrait::Explorer => "EXPLORER",
            CoreTrait::Chaos => "CHAOS",
            CoreTrait::Calm => "CALM",
        };
        f.write_str(label)
    }
}

impl fmt::Display for DialogueStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DialogueStyle::ShortCute => "short_cute",
            DialogueStyle::Rambling => "rambling",
            DialogueStyle::Wise => "wise",
            DialogueStyle::Playful => "playful",
        };
        f.write_str(label)
    }
}

/// Activity suggestions surfaced to the owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Activity {
    Play,
    MinigameDash,
    MinigameBubble,
    Explore,
    MinigameFishing,
    MinigameMemory,
    Chat,
    BlipnetVisit,
    Emote,
    Clean,
    Rest,
    DecorateRoom,
    Feed,
    Cuddle,
}

/// The five traits plus the tags derived from them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityProfile {
    pub energy: f64,
    pub curiosity: f64,
    pub sociability: f64,
    pub carefulness: f64,
    pub affection: f64,
    pub core_trait: CoreTrait,
    pub mood_bias: MoodBias,
    pub dialogue_style: DialogueStyle,
}

impl PersonalityProfile {
    /// Compute the profile from lifetime counters, live gauges and stage.
    pub fn compute(history: &CareHistory, gauges: &Gauges, stage: GrowthStage) -> Self {
        let mut energy = BASELINE;
        let mut curiosity = BASELINE;
        let mut sociability = BASELINE;
        let mut carefulness = BASELINE;
        let mut affection = BASELINE;

        let total = history.total_actions();
        if total > 0 {
            let ratio = |count: u64| count as f64 / total as f64;

            energy = (50.0 + ratio(history.total_plays) * 100.0).min(100.0);
            curiosity = (30.0 + history.distinct_kinds() as f64 * 15.0).min(100.0);
            sociability = (40.0 + ratio(history.total_chats) * 120.0).min(100.0);
            carefulness = (40.0 + ratio(history.total_cleans) * 150.0).min(100.0);
            let nurturing = history.total_feeds.saturating_add(history.total_chats);
            affection = (40.0 + ratio(nurturing) * 80.0).min(100.0);
        }

        let live_energy = gauges.energy.value();
        if live_energy > 80 {
            energy += 10.0;
        }
        if live_energy < 30 {
            energy -= 10.0;
        }
        if gauges.bond.value() > 80 {
            affection += 15.0;
            sociability += 10.0;
        }
        if gauges.cleanliness.value() > 80 {
            carefulness += 10.0;
        }

        let clamp = |value: f64| value.clamp(0.0, 100.0);
        let energy = clamp(energy);
        let curiosity = clamp(curiosity);
        let sociability = clamp(sociability);
        let carefulness = clamp(carefulness);
        let affection = clamp(affection);

        let core_trait = Self::pick_core_trait(&[
            (CoreTrait::Nurturing, affection + carefulness),
            (CoreTrait::Explorer, curiosity + energy),
            (CoreTrait::Chaos, energy + sociability - carefulness * 0.5),
            (CoreTrait::Calm, carefulness + (100.0 - energy) * 0.5),
        ]);

        let mood_bias = if live_energy < 30 {
            MoodBias::Tired
        } else if energy > 80.0 && sociability < 40.0 {
            MoodBias::Chaotic
        } else if sociability < 30.0 {
            MoodBias::Shy
        } else if sociability > 70.0 && affection > 70.0 {
            MoodBias::Bold
        } else {
            MoodBias::Happy
        };

        let dialogue_style = if stage == GrowthStage::Elder {
            DialogueStyle::Wise
        } else if stage == GrowthStage::Teen || energy > 70.0 {
            DialogueStyle::Playful
        } else if sociability > 70.0 {
            DialogueStyle::Rambling
        } else {
            DialogueStyle::ShortCute
        };

        Self {
            energy,
            curiosity,
            sociability,
            carefulness,
            affection,
            core_trait,
            mood_bias,
            dialogue_style,
        }
    }

    // A tie hands the win to the later trait in declaration order.
    fn pick_core_trait(scores: &[(CoreTrait, f64)]) -> CoreTrait {
        let mut best = scores[0];
        for candidate in &scores[1..] {
            if candidate.1 >= best.1 {
                best = *candidate;
            }
        }
        best.0
    }

    /// Activities this personality gravitates toward
    pub fn preferred_activities(&self) -> Vec<Activity> {
        let mut activities = Vec::new();

        if self.energy > 60.0 {
            activities.extend([Activity::Play, Activity::MinigameDash, Activity::MinigameBubble]);
        }
        if self.curiosity > 60.0 {
            activities.extend([
                Activity::Explore,
                Activity::MinigameFishing,
                Activity::MinigameMemory,
            ]);
        }
        if self.sociability > 60.0 {
            activities.extend([Activity::Chat, Activity::BlipnetVisit, Activity::Emote]);
        }
        if self.carefulness > 60.0 {
            activities.extend([Activity::Clean, Activity::Rest, Activity::DecorateRoom]);
        }
        if self.affection > 60.0 {
            activities.extend([Activity::Feed, Activity::Chat, Activity::Cuddle]);
        }

        if activities.is_empty() {
            vec![Activity::Play, Activity::Feed, Activity::Chat]
        } else {
            activities
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn care(feeds: u64, plays: u64, cleans: u64, rests: u64, chats: u64) -> CareHistory {
        CareHistory {
            total_feeds: feeds,
            total_plays: plays,
            total_cleans: cleans,
            total_rests: rests,
            total_chats: chats,
        }
    }

    fn calm_gauges() -> Gauges {
        Gauges::new(30, 60, 60, 50)
    }

    #[test]
    fn fresh_creature_sits_on_baselines() {
        let profile =
            PersonalityProfile::compute(&CareHistory::default(), &calm_gauges(), GrowthStage::Baby);
        assert_eq!(profile.energy, 50.0);
        assert_eq!(profile.curiosity, 50.0);
        assert_eq!(profile.sociability, 50.0);
        assert_eq!(profile.carefulness, 50.0);
        assert_eq!(profile.affection, 50.0);
        assert_eq!(profile.mood_bias, MoodBias::Happy);
        assert_eq!(profile.dialogue_style, DialogueStyle::ShortCute);
        // Nurturing and Explorer tie at 100
        assert_eq!(profile.core_trait, CoreTrait::Explorer);
    }

    #[test]
    fn ratios_drive_traits() {
        // 10 actions: 2 feeds, 4 plays, 2 cleans, 0 rests, 2 chats
        let profile = PersonalityProfile::compute(
            &care(2, 4, 2, 0, 2),
            &calm_gauges(),
            GrowthStage::Child,
        );
        assert!((profile.energy - 90.0).abs() < 1e-9);
        assert!((profile.curiosity - 90.0).abs() < 1e-9);
        assert!((profile.sociability - 64.0).abs() < 1e-9);
        assert!((profile.carefulness - 70.0).abs() < 1e-9);
        assert!((profile.affection - 72.0).abs() < 1e-9);
        assert_eq!(profile.core_trait, CoreTrait::Explorer);
        assert_eq!(profile.dialogue_style, DialogueStyle::Playful);
    }

    #[test]
    fn live_gauges_perturb_and_clamp() {
        let all_plays = care(0, 10, 0, 0, 0);
        let gauges = Gauges::new(10, 95, 90, 90);
        let profile = PersonalityProfile::compute(&all_plays, &gauges, GrowthStage::Adult);
        // 150 + 10 clamps to 100
        assert_eq!(profile.energy, 100.0);
        assert_eq!(profile.carefulness, 50.0);
        assert_eq!(profile.sociability, 50.0);
        assert_eq!(profile.affection, 55.0);
    }

    #[test]
    fn low_live_energy_means_tired() {
        let gauges = Gauges::new(30, 20, 60, 50);
        let profile =
            PersonalityProfile::compute(&care(1, 1, 1, 1, 1), &gauges, GrowthStage::Child);
        assert_eq!(profile.mood_bias, MoodBias::Tired);
    }

    #[test]
    fn chaotic_bias_needs_sociability_strictly_below_forty() {
        let profile = PersonalityProfile::compute(
            &care(0, 10, 0, 0, 0),
            &Gauges::new(30, 60, 60, 50),
            GrowthStage::Child,
        );
        assert_eq!(profile.sociability, 40.0);
        assert!(profile.energy > 80.0);
        assert_eq!(profile.mood_bias, MoodBias::Happy);
    }

    #[test]
    fn chatty_affectionate_creature_is_bold_and_rambles() {
        let profile = PersonalityProfile::compute(
            &care(5, 0, 0, 0, 5),
            &Gauges::new(30, 60, 60, 90),
            GrowthStage::Child,
        );
        assert_eq!(profile.sociability, 100.0);
        assert_eq!(profile.affection, 100.0);
        assert_eq!(profile.mood_bias, MoodBias::Bold);
        assert_eq!(profile.dialogue_style, DialogueStyle::Rambling);
    }

    #[test]
    fn elder_always_speaks_wisely() {
        let profile = PersonalityProfile::compute(
            &care(0, 10, 0, 0, 0),
            &calm_gauges(),
            GrowthStage::Elder,
        );
        assert_eq!(profile.dialogue_style, DialogueStyle::Wise);
    }

    #[test]
    fn teen_is_playful() {
        let profile = PersonalityProfile::compute(
            &CareHistory::default(),
            &calm_gauges(),
            GrowthStage::Teen,
        );
        assert_eq!(profile.dialogue_style, DialogueStyle::Playful);
    }

    #[test]
    fn careful_owner_still_reads_as_nurturing() {
        let profile = PersonalityProfile::compute(
            &care(0, 0, 6, 4, 0),
            &Gauges::new(30, 20, 95, 50),
            GrowthStage::Adult,
        );
        assert_eq!(profile.carefulness, 100.0);
        // Nurturing 140 beats Calm 130
        assert_eq!(profile.core_trait, CoreTrait::Nurturing);
    }

    #[test]
    fn preferred_activities_fall_back_when_nothing_stands_out() {
        let profile = PersonalityProfile::compute(
            &CareHistory::default(),
            &calm_gauges(),
            GrowthStage::Baby,
        );
        assert_eq!(
            profile.preferred_activities(),
            vec![Activity::Play, Activity::Feed, Activity::Chat]
        );
    }

    #[test]
    fn preferred_activities_follow_high_traits() {
        let profile = PersonalityProfile::compute(
            &care(0, 10, 0, 0, 0),
            &calm_gauges(),
            GrowthStage::Child,
        );
        let activities = profile.preferred_activities();
        assert!(activities.contains(&Activity::MinigameDash));
        assert!(!activities.contains(&Activity::Cuddle));
    }
}
