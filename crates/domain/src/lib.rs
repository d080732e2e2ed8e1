//! Blipkin creature simulation domain
//!
//! Pure, synchronous rules for one owner's virtual companion: gauges, mood,
//! leveling, growth, personality and the time-decay reconciler. Nothing in
//! this crate performs I/O or reads the ambient clock.

pub mod aggregates;
pub mod error;
pub mod events;
pub mod ids;
pub mod simulation;
pub mod simulation_config;
pub mod value_objects;

pub use aggregates::CreatureSnapshot;
pub use error::DomainError;
pub use events::{
    ActionOutcome, CheckIn, DecayReport, EnergyGrant, Evolution, MiniGameOutcome, RestNeeded,
};
pub use ids::{CreatureId, OwnerId};
pub use simulation::{check_for_evolution, CreatureSimulator};
pub use simulation_config::{DecayRates, FeedingPolicy, RestPolicy, SimulationConfig};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    scale_floor, scale_signed, xp_for_level, ActionEvent, ActionKind, ActionReward, Activity,
    Animation, CareHistory, CoreTrait, DialogueStyle, EventMultipliers, Gauge, Gauges,
    GrowthStage, LevelUp, MegaForm, MegaFormScores, MiniGame, Mood, MoodBias,
    PersonalityProfile, PromotionKey, RewardTable,
};
