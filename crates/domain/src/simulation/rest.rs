//! Energy rest state machine
//!
//! `Active -> Resting` when play is attempted while exhausted.
//! `Resting -> Active` once the cooldown has elapsed (energy refilled), or
//! early through an external energy grant.

use chrono::{DateTime, Utc};

use super::CreatureSimulator;
use crate::aggregates::CreatureSnapshot;
use crate::error::DomainError;
use crate::events::{EnergyGrant, RestNeeded};
use crate::value_objects::Gauge;

impl CreatureSimulator {
    /// Decide whether play may go ahead, moving the rest state as needed.
    ///
    /// Returns `Some` when play must be refused.
    pub(crate) fn gate_play(
        &self,
        snapshot: &mut CreatureSnapshot,
        now: DateTime<Utc>,
    ) -> Option<RestNeeded> {
        let policy = &self.config.rest;
        // A rest action can lift energy above the threshold mid-cooldown; the
        // resting flag then stays set until the next exhausted play refills it
        if snapshot.energy().value() >= policy.exhausted_below {
            return None;
        }

        let cooldown = policy.cooldown();
        if !snapshot.is_energy_restoring() {
            snapshot.start_resting(now);
            return Some(RestNeeded {
                started_resting: true,
                retry_after_ms: cooldown.num_milliseconds(),
            });
        }

        let rested_for = now - snapshot.last_energy_restore();
        if rested_for >= cooldown {
            snapshot.set_energy(Gauge::full());
            snapshot.finish_resting(now);
            None
        } else {
            Some(RestNeeded {
                started_resting: false,
                retry_after_ms: (cooldown - rested_for).num_milliseconds(),
            })
        }
    }

    /// Add purchased or gifted energy, ending any rest cooldown.
    pub fn grant_energy(
        &self,
        snapshot: &CreatureSnapshot,
        amount: u32,
        now: DateTime<Utc>,
    ) -> Result<(CreatureSnapshot, EnergyGrant), DomainError> {
        if amount == 0 {
            return Err(DomainError::validation("energy grant must be positive"));
        }

        let mut next = snapshot.clone();
        let energy_before = next.energy();
        let ended_rest = next.is_energy_restoring();

        next.set_energy(energy_before.adjust(i64::from(amount)));
        next.finish_resting(now);

        let grant = EnergyGrant {
            amount,
            energy_before,
            energy_after: next.energy(),
            ended_rest,
        };
        Ok((next, grant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::OwnerId;
    use crate::value_objects::Gauges;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    fn exhausted() -> CreatureSnapshot {
        CreatureSnapshot::hatch(OwnerId::new(), t0()).with_gauges(Gauges::new(20, 5, 90, 50))
    }

    #[test]
    fn rested_creature_plays_freely() {
        let sim = CreatureSimulator::default();
        let mut creature = CreatureSnapshot::hatch(OwnerId::new(), t0());

        assert!(sim.gate_play(&mut creature, t0()).is_none());
        assert!(!creature.is_energy_restoring());
    }

    #[test]
    fn first_exhausted_attempt_starts_resting() {
        let sim = CreatureSimulator::default();
        let mut creature = exhausted();
        let now = t0() + Duration::minutes(5);

        let rest = sim.gate_play(&mut creature, now).unwrap();

        assert!(rest.started_resting);
        assert_eq!(rest.retry_after_ms, 10_800_000);
        assert!(creature.is_energy_restoring());
        assert_eq!(creature.last_energy_restore(), now);
    }

    #[test]
    fn attempts_during_cooldown_report_remaining_time() {
        let sim = CreatureSimulator::default();
        let mut creature = exhausted().with_rest(true, t0());

        let rest = sim.gate_play(&mut creature, t0() + Duration::hours(1)).unwrap();

        assert!(!rest.started_resting);
        assert_eq!(rest.retry_after(), Duration::hours(2));
        assert_eq!(creature.last_energy_restore(), t0());
    }

    #[test]
    fn cooldown_elapsed_refills_energy() {
        let sim = CreatureSimulator::default();
        let mut creature = exhausted().with_rest(true, t0());
        let now = t0() + Duration::hours(3);

        assert!(sim.gate_play(&mut creature, now).is_none());
        assert!(creature.energy().is_full());
        assert!(!creature.is_energy_restoring());
        assert_eq!(creature.last_energy_restore(), now);
    }

    #[test]
    fn energy_recovered_mid_cooldown_plays_but_keeps_resting_flag() {
        let sim = CreatureSimulator::default();
        let mut creature = exhausted()
            .with_rest(true, t0())
            .with_gauges(Gauges::new(20, 35, 90, 50));

        assert!(sim.gate_play(&mut creature, t0() + Duration::hours(1)).is_none());
        assert_eq!(creature.energy().value(), 35);
        assert!(creature.is_energy_restoring());
        assert_eq!(creature.last_energy_restore(), t0());
    }

    #[test]
    fn grant_cuts_rest_short_and_clamps() {
        let sim = CreatureSimulator::default();
        let creature = exhausted().with_rest(true, t0());

        let (next, grant) = sim
            .grant_energy(&creature, 200, t0() + Duration::minutes(10))
            .unwrap();

        assert_eq!(grant.energy_before.value(), 5);
        assert_eq!(grant.energy_after.value(), 100);
        assert!(grant.ended_rest);
        assert!(!next.is_energy_restoring());
    }

    #[test]
    fn zero_grant_is_rejected() {
        let sim = CreatureSimulator::default();
        let result = sim.grant_energy(&exhausted(), 0, t0());

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
