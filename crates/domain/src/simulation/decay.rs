//! Time decay and session reconciliation

use chrono::{DateTime, Utc};

use super::CreatureSimulator;
use crate::aggregates::CreatureSnapshot;
use crate::events::DecayReport;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Whole points of drift for `hours` at `rate` per hour.
fn drift(rate: u32, hours: f64) -> i64 {
    (f64::from(rate) * hours).floor() as i64
}

impl CreatureSimulator {
    /// Apply the decay owed since the last stat update.
    ///
    /// Returns the input unchanged when less than the minimum interval has
    /// passed (or the clock went backwards).
    pub fn reconcile(&self, snapshot: &CreatureSnapshot, now: DateTime<Utc>) -> CreatureSnapshot {
        self.reconcile_with_report(snapshot, now).0
    }

    /// Same as [`reconcile`](Self::reconcile), also reporting what changed.
    pub fn reconcile_with_report(
        &self,
        snapshot: &CreatureSnapshot,
        now: DateTime<Utc>,
    ) -> (CreatureSnapshot, Option<DecayReport>) {
        let elapsed = now - snapshot.last_stat_update();
        if elapsed < self.config.decay_min_interval() || elapsed.num_milliseconds() <= 0 {
            return (snapshot.clone(), None);
        }

        let hours = elapsed.num_milliseconds() as f64 / MILLIS_PER_HOUR;
        let rates = &self.config.decay;
        let hunger_gained = drift(rates.hunger_per_hour, hours);
        let energy_lost = drift(rates.energy_per_hour, hours);
        let cleanliness_lost = drift(rates.cleanliness_per_hour, hours);

        let mut next = snapshot.clone();
        next.adjust_gauges(hunger_gained, -energy_lost, -cleanliness_lost, 0);

        let mut missed_feeds = 0;
        let mut feed_penalty = 0;
        if self.feed_window_due(&next, now) {
            let feeding = &self.config.feeding;
            missed_feeds = feeding.daily_target.saturating_sub(next.feed_count());
            feed_penalty = i64::from(missed_feeds) * i64::from(feeding.missed_feed_energy_penalty);
            next.adjust_gauges(0, -feed_penalty, 0, 0);
            next.reset_feed_window(now);
        }

        next.mark_stats_updated(now);

        let report = DecayReport {
            hours_elapsed: hours,
            hunger_gained,
            energy_lost,
            cleanliness_lost,
            missed_feeds,
            feed_penalty,
        };
        (next, Some(report))
    }

    pub(crate) fn feed_window_due(&self, snapshot: &CreatureSnapshot, now: DateTime<Utc>) -> bool {
        now - snapshot.last_feed_reset() >= self.config.feed_window()
    }
}
