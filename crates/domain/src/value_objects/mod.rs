//! Value objects - Immutable objects defined by their attributes

mod action;
mod care_history;
mod gauge;
mod growth;
mod leveling;
mod minigame;
mod mood;
mod personality;
mod promotion;

pub use action::{ActionEvent, ActionKind, ActionReward, RewardTable};
pub use care_history::CareHistory;
pub use gauge::{Gauge, Gauges};
pub use growth::{GrowthStage, MegaForm, MegaFormScores};
pub use leveling::{xp_for_level, LevelUp};
pub use minigame::MiniGame;
pub use mood::{Animation, Mood};
pub use personality::{Activity, CoreTrait, DialogueStyle, MoodBias, PersonalityProfile};
pub use promotion::{scale_floor, scale_signed, EventMultipliers, PromotionKey};
