//! Use case result types.

use blipkin_domain::{
    ActionOutcome, Activity, CheckIn, CreatureSnapshot, EnergyGrant, GrowthStage,
    MiniGameOutcome, Mood, PersonalityProfile,
};
use serde::Serialize;

/// Creature as shown when the owner opens the app
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureView {
    pub creature: CreatureSnapshot,
    #[serde(flatten)]
    pub check_in: CheckIn,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    pub creature: CreatureSnapshot,
    pub outcome: ActionOutcome,
    /// Coin balance after crediting, when coins were earned and the ledger
    /// accepted them
    pub balance: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyResult {
    pub creature: CreatureSnapshot,
    pub grant: EnergyGrant,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniGameResult {
    pub creature: CreatureSnapshot,
    pub outcome: MiniGameOutcome,
    pub balance: Option<u64>,
}

/// Personality as of now, for dialogue and diary generators
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityView {
    pub profile: PersonalityProfile,
    pub preferred_activities: Vec<Activity>,
    pub mood: Mood,
    pub growth_stage: GrowthStage,
}
