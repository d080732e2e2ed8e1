//! Shared fixtures for creature use case tests.

use blipkin_domain::{CreatureSnapshot, OwnerId, PromotionKey};
use chrono::{DateTime, TimeZone, Utc};

use crate::infrastructure::ports::{MockClockPort, MockPromotionsPort};

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
}

pub fn clock_at(now: DateTime<Utc>) -> MockClockPort {
    let mut clock = MockClockPort::new();
    clock.expect_now().returning(move || now);
    clock
}

pub fn promotions(active: Vec<PromotionKey>) -> MockPromotionsPort {
    let mut promotions = MockPromotionsPort::new();
    promotions
        .expect_active_at()
        .returning(move |_| Ok(active.clone()));
    promotions
}

pub fn hatchling(owner_id: OwnerId) -> CreatureSnapshot {
    CreatureSnapshot::hatch(owner_id, t0())
}
