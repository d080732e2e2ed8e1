//! Owner actions, check-ins, mini-game awards and the personality view

use chrono::{DateTime, Utc};

use super::CreatureSimulator;
use crate::aggregates::CreatureSnapshot;
use crate::events::{ActionOutcome, CheckIn, Evolution, MiniGameOutcome};
use crate::value_objects::{
    scale_floor, scale_signed, ActionEvent, ActionKind, Animation, EventMultipliers, MiniGame,
    Mood, PersonalityProfile,
};

/// One-shot animation for an accepted action.
fn presentation_cue(
    kind: ActionKind,
    leveled_up: bool,
    evolution: Option<&Evolution>,
    mood: Mood,
) -> Animation {
    if evolution.is_some() {
        Animation::Evolving
    } else if leveled_up {
        Animation::Happy
    } else {
        match kind {
            ActionKind::Play => Animation::Excited,
            ActionKind::Rest => Animation::Sleep,
            _ => mood.animation(),
        }
    }
}

impl CreatureSimulator {
    /// Run one owner action through the full pipeline.
    ///
    /// Reconcile, apply the rewarded deltas, resolve level-ups, recompute mood
    /// and check for evolution. A play refused by the rest cooldown still
    /// returns the reconciled snapshot, which callers should persist.
    pub fn apply_action(
        &self,
        snapshot: &CreatureSnapshot,
        event: ActionEvent,
        multipliers: &EventMultipliers,
    ) -> (CreatureSnapshot, ActionOutcome) {
        let ActionEvent { kind, timestamp: now } = event;
        let mut next = self.reconcile(snapshot, now);

        if kind == ActionKind::Play {
            if let Some(rest) = self.gate_play(&mut next, now) {
                let cue = next.mood().animation();
                return (next, ActionOutcome::rejected(kind, rest, cue));
            }
        }

        // The reconciler skips the window roll inside its no-op interval
        if kind == ActionKind::Feed && self.feed_window_due(&next, now) {
            next.reset_feed_window(now);
        }

        let reward = self.config.rewards.for_kind(kind);
        let energy = match kind {
            ActionKind::Rest => scale_signed(reward.energy, multipliers.rest_energy),
            _ => reward.energy,
        };
        let bond_gained = scale_signed(reward.bond, multipliers.bond);
        next.adjust_gauges(reward.hunger, energy, reward.cleanliness, bond_gained);
        next.record_action(kind);

        let xp_gained = scale_floor(reward.xp, multipliers.xp_for(kind));
        let coins_earned = scale_floor(reward.coins, multipliers.coins);

        let from_level = next.level();
        let level_up = next.gain_xp(xp_gained);
        let evolution = self.evolve(&mut next);
        next.mark_seen(now);

        let outcome = ActionOutcome {
            kind,
            xp_gained,
            bond_gained,
            coins_earned,
            leveled_up: level_up.did_level_up,
            levels_gained: level_up.levels_gained(from_level),
            evolution,
            rest: None,
            cue: presentation_cue(kind, level_up.did_level_up, evolution.as_ref(), next.mood()),
        };
        (next, outcome)
    }

    /// Owner opened the app: reconcile and greet.
    pub fn check_in(
        &self,
        snapshot: &CreatureSnapshot,
        now: DateTime<Utc>,
    ) -> (CreatureSnapshot, CheckIn) {
        let missed_you = now - snapshot.last_seen_at() >= self.config.missed_you_after();

        let mut next = self.reconcile(snapshot, now);
        let can_evolve = super::check_for_evolution(&next).is_some();
        next.mark_seen(now);

        (next, CheckIn { missed_you, can_evolve })
    }

    /// Pay out a finished mini-game. Gauges and care counters are untouched.
    pub fn award_minigame(
        &self,
        snapshot: &CreatureSnapshot,
        game: MiniGame,
        score: u64,
        now: DateTime<Utc>,
        multipliers: &EventMultipliers,
    ) -> (CreatureSnapshot, MiniGameOutcome) {
        let mut next = self.reconcile(snapshot, now);

        let xp_gained = scale_floor(game.base_xp(), multipliers.xp);
        let coins_earned = scale_floor(game.coins_for(score), multipliers.coins);

        let from_level = next.level();
        let level_up = next.gain_xp(xp_gained);
        let evolution = self.evolve(&mut next);
        next.mark_seen(now);

        let outcome = MiniGameOutcome {
            game,
            score,
            xp_gained,
            coins_earned,
            leveled_up: level_up.did_level_up,
            levels_gained: level_up.levels_gained(from_level),
            evolution,
        };
        (next, outcome)
    }

    /// Personality as of `now`. A view: the snapshot is not advanced.
    pub fn personality(
        &self,
        snapshot: &CreatureSnapshot,
        now: DateTime<Utc>,
    ) -> PersonalityProfile {
        let current = self.reconcile(snapshot, now);
        PersonalityProfile::compute(current.care(), current.gauges(), current.growth_stage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::OwnerId;
    use crate::simulation_config::SimulationConfig;
    use crate::value_objects::{CareHistory, Gauges, GrowthStage, MegaForm, MoodBias, PromotionKey};
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    fn hatchling() -> CreatureSnapshot {
        CreatureSnapshot::hatch(OwnerId::new(), t0())
    }

    fn act(kind: ActionKind, at: DateTime<Utc>) -> ActionEvent {
        ActionEvent::new(kind, at)
    }

    #[test]
    fn feeding_applies_the_reward_row() {
        let sim = CreatureSimulator::default();
        let (next, outcome) = sim.apply_action(&hatchling(), act(ActionKind::Feed, t0()), &EventMultipliers::none());

        assert_eq!(next.hunger().value(), 5);
        assert_eq!(next.bond().value(), 53);
        assert_eq!(next.xp(), 5);
        assert_eq!(next.feed_count(), 1);
        assert_eq!(next.care().total_feeds, 1);
        assert_eq!(outcome.xp_gained, 5);
        assert_eq!(outcome.bond_gained, 3);
        assert_eq!(outcome.coins_earned, 10);
        assert!(!outcome.leveled_up);
        assert!(!outcome.rest_needed());
        assert_eq!(next.mood(), Mood::Playful);
        assert_eq!(outcome.cue, Animation::Happy);
    }

    #[test]
    fn input_snapshot_is_left_untouched() {
        let sim = CreatureSimulator::default();
        let creature = hatchling();
        let copy = creature.clone();

        let _ = sim.apply_action(&creature, act(ActionKind::Play, t0() + Duration::hours(3)), &EventMultipliers::none());

        assert_eq!(creature, copy);
    }

    #[test]
    fn chat_only_touches_bond_and_xp() {
        let sim = CreatureSimulator::default();
        let (next, outcome) = sim.apply_action(&hatchling(), act(ActionKind::Chat, t0()), &EventMultipliers::none());

        assert_eq!(next.hunger().value(), 30);
        assert_eq!(next.energy().value(), 80);
        assert_eq!(next.cleanliness().value(), 100);
        assert_eq!(next.bond().value(), 53);
        assert_eq!(outcome.xp_gained, 10);
        assert_eq!(next.care().total_chats, 1);
    }

    #[test]
    fn play_and_rest_have_their_own_cues() {
        let sim = CreatureSimulator::default();
        let none = EventMultipliers::none();

        let (_, played) = sim.apply_action(&hatchling(), act(ActionKind::Play, t0()), &none);
        let (_, rested) = sim.apply_action(&hatchling(), act(ActionKind::Rest, t0()), &none);

        assert_eq!(played.cue, Animation::Excited);
        assert_eq!(rested.cue, Animation::Sleep);
    }

    #[test]
    fn large_xp_gain_resolves_several_levels() {
        let mut config = SimulationConfig::default();
        config.rewards.chat.xp = 1000;
        let sim = CreatureSimulator::new(config);

        let (next, outcome) = sim.apply_action(&hatchling(), act(ActionKind::Chat, t0()), &EventMultipliers::none());

        // 100 + 200 + 300 + 400
        assert_eq!(next.level(), 5);
        assert_eq!(next.xp(), 0);
        assert!(outcome.leveled_up);
        assert_eq!(outcome.levels_gained, 4);
        assert_eq!(outcome.cue, Animation::Happy);
    }

    #[test]
    fn crossing_level_six_evolves_into_child() {
        let sim = CreatureSimulator::default();
        let creature = hatchling().with_progress(5, 495);

        let (next, outcome) = sim.apply_action(&creature, act(ActionKind::Chat, t0()), &EventMultipliers::none());

        assert_eq!(next.level(), 6);
        assert_eq!(next.growth_stage(), GrowthStage::Child);
        assert!(outcome.evolved());
        assert_eq!(outcome.cue, Animation::Evolving);
    }

    #[test]
    fn crossing_level_fifty_one_assigns_mega_form() {
        let sim = CreatureSimulator::default();
        let care = CareHistory {
            total_feeds: 40,
            total_plays: 30,
            total_cleans: 20,
            total_rests: 10,
            total_chats: 0,
        };
        let creature = hatchling()
            .with_progress(50, 4_995)
            .with_stage(GrowthStage::Adult, None)
            .with_care(care);

        let (next, outcome) = sim.apply_action(&creature, act(ActionKind::Chat, t0()), &EventMultipliers::none());

        assert_eq!(next.growth_stage(), GrowthStage::Mega);
        assert_eq!(next.mega_form(), Some(MegaForm::Chaos));
        assert_eq!(outcome.evolution.and_then(|e| e.mega_form), Some(MegaForm::Chaos));
    }

    #[test]
    fn promotions_scale_and_floor_rewards() {
        let sim = CreatureSimulator::default();
        let multipliers = EventMultipliers::from_promotions(&[
            PromotionKey::DoubleXp,
            PromotionKey::FeedingFrenzy,
            PromotionKey::BonusCoins,
            PromotionKey::HappinessWeek,
        ]);

        let (next, outcome) = sim.apply_action(&hatchling(), act(ActionKind::Feed, t0()), &multipliers);

        // 5 * 2 * 1.5
        assert_eq!(outcome.xp_gained, 15);
        assert_eq!(outcome.coins_earned, 20);
        assert_eq!(outcome.bond_gained, 6);
        assert_eq!(next.bond().value(), 56);
    }

    #[test]
    fn chill_sunday_doubles_rest_energy() {
        let sim = CreatureSimulator::default();
        let creature = hatchling().with_gauges(Gauges::new(20, 20, 90, 50));
        let multipliers = EventMultipliers::from_promotions(&[PromotionKey::ChillSunday]);

        let (next, _) = sim.apply_action(&creature, act(ActionKind::Rest, t0()), &multipliers);

        assert_eq!(next.energy().value(), 80);
    }

    #[test]
    fn exhausted_play_walks_the_rest_cycle() {
        let sim = CreatureSimulator::default();
        let none = EventMultipliers::none();
        let creature = hatchling().with_gauges(Gauges::new(20, 5, 90, 50));

        let (resting, first) = sim.apply_action(&creature, act(ActionKind::Play, t0()), &none);
        assert_eq!(first.rest_remaining_ms(), Some(10_800_000));
        assert!(resting.is_energy_restoring());
        assert_eq!(resting.care().total_plays, 0);
        assert_eq!(resting.last_seen_at(), t0());

        let (still, second) = sim.apply_action(&resting, act(ActionKind::Play, t0() + Duration::hours(1)), &none);
        assert_eq!(second.rest_remaining_ms(), Some(7_200_000));
        assert_eq!(second.xp_gained, 0);

        let (recovered, third) = sim.apply_action(&still, act(ActionKind::Play, t0() + Duration::hours(3)), &none);
        assert!(!third.rest_needed());
        assert!(!recovered.is_energy_restoring());
        assert_eq!(recovered.energy().value(), 90);
        assert_eq!(recovered.care().total_plays, 1);
    }

    #[test]
    fn feed_rolls_a_due_window_without_penalty() {
        let sim = CreatureSimulator::default();
        let now = t0() + Duration::hours(25);
        let creature = hatchling()
            .with_feed_window(1, t0())
            .with_clocks(now - Duration::minutes(30), now - Duration::minutes(30));

        let (next, _) = sim.apply_action(&creature, act(ActionKind::Feed, now), &EventMultipliers::none());

        assert_eq!(next.energy().value(), 80);
        assert_eq!(next.feed_count(), 1);
        assert_eq!(next.last_feed_reset(), now);
    }

    #[test]
    fn accepted_actions_mark_the_owner_seen() {
        let sim = CreatureSimulator::default();
        let later = t0() + Duration::minutes(20);

        let (next, _) = sim.apply_action(&hatchling(), act(ActionKind::Clean, later), &EventMultipliers::none());

        assert_eq!(next.last_seen_at(), later);
    }

    #[test]
    fn long_absence_is_missed() {
        let sim = CreatureSimulator::default();
        let now = t0() + Duration::hours(30);

        let (next, check_in) = sim.check_in(&hatchling(), now);

        assert!(check_in.missed_you);
        assert!(!check_in.can_evolve);
        assert_eq!(next.last_seen_at(), now);
        assert_eq!(next.last_stat_update(), now);
    }

    #[test]
    fn short_absence_is_not_missed() {
        let sim = CreatureSimulator::default();
        let creature = hatchling().with_progress(6, 0);

        let (_, check_in) = sim.check_in(&creature, t0() + Duration::hours(2));

        assert!(!check_in.missed_you);
        assert!(check_in.can_evolve);
    }

    #[test]
    fn minigame_pays_xp_and_coins_only() {
        let sim = CreatureSimulator::default();
        let creature = hatchling().with_progress(1, 95);

        let (next, outcome) = sim.award_minigame(&creature, MiniGame::Dash, 4, t0(), &EventMultipliers::none());

        assert_eq!(outcome.xp_gained, 30);
        assert_eq!(outcome.coins_earned, 20);
        assert!(outcome.leveled_up);
        assert_eq!(next.level(), 2);
        assert_eq!(next.xp(), 25);
        assert_eq!(next.gauges(), creature.gauges());
        assert_eq!(next.care(), creature.care());
    }

    #[test]
    fn personality_reads_decayed_gauges_without_advancing() {
        let sim = CreatureSimulator::default();
        let creature = hatchling();

        let profile = sim.personality(&creature, t0() + Duration::hours(20));

        assert_eq!(profile.mood_bias, MoodBias::Tired);
        assert_eq!(creature.last_stat_update(), t0());
    }

    #[test]
    fn long_care_sequence_keeps_progress_monotonic() {
        let sim = CreatureSimulator::default();
        let none = EventMultipliers::none();
        let mut creature = hatchling();
        let mut now = t0();

        for step in 0..400u32 {
            now += Duration::minutes(37);
            let kind = ActionKind::all()[(step % 5) as usize];
            let before = creature.clone();
            let (next, _) = sim.apply_action(&creature, act(kind, now), &none);

            assert!(next.level() >= before.level());
            assert!(next.growth_stage() >= before.growth_stage());
            assert!(next.care().total_actions() >= before.care().total_actions());
            for gauge in [next.hunger(), next.energy(), next.cleanliness(), next.bond()] {
                assert!(gauge.value() <= 100);
            }
            assert_eq!(next.animation(), next.mood().animation());
            creature = next;
        }
    }
}
