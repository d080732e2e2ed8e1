//! Creature aggregate - one owner's virtual companion
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: state only changes through the simulation
//! - **Newtypes**: every meter is a clamped [`Gauge`]
//! - **Derived state**: `mood` and `animation` are refreshed whenever a gauge
//!   moves, never set directly
//! - **Monotonic**: level, stage and lifetime counters only go up

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CreatureId, OwnerId};
use crate::value_objects::{
    xp_for_level, ActionKind, Animation, CareHistory, Gauge, Gauges, GrowthStage, LevelUp,
    MegaForm, Mood,
};

/// Full persisted state of a creature
///
/// # Invariants
///
/// - `level >= 1` and `xp < xp_for_level(level)` once leveling has resolved
/// - `mega_form` is only ever set while entering `GrowthStage::Mega`, and never
///   changes afterwards
/// - `animation == mood.animation()`
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use blipkin_domain::{CreatureSnapshot, GrowthStage, Mood, OwnerId};
///
/// let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
/// let creature = CreatureSnapshot::hatch(OwnerId::new(), now);
///
/// assert_eq!(creature.level(), 1);
/// assert_eq!(creature.growth_stage(), GrowthStage::Baby);
/// assert_eq!(creature.mood(), Mood::Playful);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureSnapshot {
    // Identity
    id: CreatureId,
    owner_id: OwnerId,

    // Progression
    level: u32,
    xp: u64,
    growth_stage: GrowthStage,
    mega_form: Option<MegaForm>,

    // Live meters
    #[serde(flatten)]
    gauges: Gauges,
    mood: Mood,
    animation: Animation,

    // Housekeeping clocks
    last_stat_update: DateTime<Utc>,
    last_seen_at: DateTime<Utc>,
    last_feed_reset: DateTime<Utc>,
    last_energy_restore: DateTime<Utc>,

    // Daily feeding window
    feed_count: u32,

    // Rest cooldown
    energy_restoring: bool,

    #[serde(flatten)]
    care: CareHistory,
}

impl CreatureSnapshot {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// A freshly hatched creature.
    pub fn hatch(owner_id: OwnerId, now: DateTime<Utc>) -> Self {
        let gauges = Gauges::new(30, 80, 100, 50);
        let mood = Mood::classify(&gauges);
        Self {
            id: CreatureId::new(),
            owner_id,
            level: 1,
            xp: 0,
            growth_stage: GrowthStage::Baby,
            mega_form: None,
            gauges,
            mood,
            animation: mood.animation(),
            last_stat_update: now,
            last_seen_at: now,
            last_feed_reset: now,
            last_energy_restore: now,
            feed_count: 0,
            energy_restoring: false,
            care: CareHistory::default(),
        }
    }

    // =========================================================================
    // Builder (restoring stored state, fixtures)
    // =========================================================================

    pub fn with_id(mut self, id: CreatureId) -> Self {
        self.id = id;
        self
    }

    /// Replace the gauges and refresh mood.
    pub fn with_gauges(mut self, gauges: Gauges) -> Self {
        self.gauges = gauges;
        self.refresh_mood();
        self
    }

    /// Set level and banked XP. Level is floored at 1; XP is resolved so the
    /// leveling invariant holds.
    pub fn with_progress(mut self, level: u32, xp: u64) -> Self {
        let resolved = LevelUp::resolve(level.max(1), xp);
        self.level = resolved.new_level;
        self.xp = resolved.remaining_xp;
        self
    }

    pub fn with_stage(mut self, stage: GrowthStage, mega_form: Option<MegaForm>) -> Self {
        self.growth_stage = stage;
        self.mega_form = mega_form;
        self
    }

    pub fn with_care(mut self, care: CareHistory) -> Self {
        self.care = care;
        self
    }

    pub fn with_feed_window(mut self, feed_count: u32, last_feed_reset: DateTime<Utc>) -> Self {
        self.feed_count = feed_count;
        self.last_feed_reset = last_feed_reset;
        self
    }

    pub fn with_rest(mut self, energy_restoring: bool, last_energy_restore: DateTime<Utc>) -> Self {
        self.energy_restoring = energy_restoring;
        self.last_energy_restore = last_energy_restore;
        self
    }

    pub fn with_clocks(mut self, last_stat_update: DateTime<Utc>, last_seen_at: DateTime<Utc>) -> Self {
        self.last_stat_update = last_stat_update;
        self.last_seen_at = last_seen_at;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CreatureId {
        self.id
    }

    #[inline]
    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn xp(&self) -> u64 {
        self.xp
    }

    /// XP still needed to reach the next level
    pub fn xp_to_next_level(&self) -> u64 {
        xp_for_level(self.level).saturating_sub(self.xp)
    }

    #[inline]
    pub fn growth_stage(&self) -> GrowthStage {
        self.growth_stage
    }

    #[inline]
    pub fn mega_form(&self) -> Option<MegaForm> {
        self.mega_form
    }

    #[inline]
    pub fn gauges(&self) -> &Gauges {
        &self.gauges
    }

    pub fn hunger(&self) -> Gauge {
        self.gauges.hunger
    }

    pub fn energy(&self) -> Gauge {
        self.gauges.energy
    }

    pub fn cleanliness(&self) -> Gauge {
        self.gauges.cleanliness
    }

    pub fn bond(&self) -> Gauge {
        self.gauges.bond
    }

    #[inline]
    pub fn mood(&self) -> Mood {
        self.mood
    }

    #[inline]
    pub fn animation(&self) -> Animation {
        self.animation
    }

    pub fn last_stat_update(&self) -> DateTime<Utc> {
        self.last_stat_update
    }

    pub fn last_seen_at(&self) -> DateTime<Utc> {
        self.last_seen_at
    }

    pub fn last_feed_reset(&self) -> DateTime<Utc> {
        self.last_feed_reset
    }

    pub fn last_energy_restore(&self) -> DateTime<Utc> {
        self.last_energy_restore
    }

    pub fn feed_count(&self) -> u32 {
        self.feed_count
    }

    pub fn is_energy_restoring(&self) -> bool {
        self.energy_restoring
    }

    #[inline]
    pub fn care(&self) -> &CareHistory {
        &self.care
    }

    // =========================================================================
    // Crate-internal mutations (driven by the simulation)
    // =========================================================================

    pub(crate) fn refresh_mood(&mut self) {
        self.mood = Mood::classify(&self.gauges);
        self.animation = self.mood.animation();
    }

    pub(crate) fn adjust_gauges(&mut self, hunger: i64, energy: i64, cleanliness: i64, bond: i64) {
        self.gauges.hunger = self.gauges.hunger.adjust(hunger);
        self.gauges.energy = self.gauges.energy.adjust(energy);
        self.gauges.cleanliness = self.gauges.cleanliness.adjust(cleanliness);
        self.gauges.bond = self.gauges.bond.adjust(bond);
        self.refresh_mood();
    }

    pub(crate) fn set_energy(&mut self, energy: Gauge) {
        self.gauges.energy = energy;
        self.refresh_mood();
    }

    /// Bank XP and resolve every level it pays for.
    pub(crate) fn gain_xp(&mut self, amount: u64) -> LevelUp {
        let resolved = LevelUp::resolve(self.level, self.xp.saturating_add(amount));
        self.level = resolved.new_level;
        self.xp = resolved.remaining_xp;
        resolved
    }

    pub(crate) fn advance_stage(&mut self, stage: GrowthStage, mega_form: Option<MegaForm>) {
        if stage <= self.growth_stage {
            return;
        }
        self.growth_stage = stage;
        if self.mega_form.is_none() {
            self.mega_form = mega_form;
        }
    }

    pub(crate) fn record_action(&mut self, kind: ActionKind) {
        self.care.record(kind);
        if kind == ActionKind::Feed {
            self.feed_count = self.feed_count.saturating_add(1);
        }
    }

    pub(crate) fn mark_stats_updated(&mut self, now: DateTime<Utc>) {
        self.last_stat_update = self.last_stat_update.max(now);
    }

    pub(crate) fn mark_seen(&mut self, now: DateTime<Utc>) {
        self.last_seen_at = self.last_seen_at.max(now);
    }

    /// Close the feeding window and start a new one at `now`.
    pub(crate) fn reset_feed_window(&mut self, now: DateTime<Utc>) {
        self.feed_count = 0;
        self.last_feed_reset = self.last_feed_reset.max(now);
    }

    pub(crate) fn start_resting(&mut self, now: DateTime<Utc>) {
        self.energy_restoring = true;
        self.last_energy_restore = self.last_energy_restore.max(now);
    }

    pub(crate) fn finish_resting(&mut self, now: DateTime<Utc>) {
        self.energy_restoring = false;
        self.last_energy_restore = self.last_energy_restore.max(now);
    }
}
