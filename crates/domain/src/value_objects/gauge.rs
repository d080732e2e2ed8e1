//! Gauge value object - a bounded need or relationship meter

use serde::{Deserialize, Serialize};
use std::fmt;

/// A bounded integer meter in `[0, 100]`.
///
/// Used for hunger, energy, cleanliness and bond. Every constructor and
/// arithmetic helper clamps, so a `Gauge` can never hold an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Gauge(u8);

impl Gauge {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    /// Create a gauge, clamping the value into range.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn empty() -> Self {
        Self(Self::MIN)
    }

    pub fn full() -> Self {
        Self(Self::MAX)
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Apply a signed delta, saturating at both ends.
    pub fn adjust(self, delta: i64) -> Self {
        Self::new(self.0 as i64 + delta)
    }

    pub fn is_full(self) -> bool {
        self.0 == Self::MAX
    }
}

impl Default for Gauge {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<i64> for Gauge {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Gauge> for u8 {
    fn from(value: Gauge) -> Self {
        value.0
    }
}

impl fmt::Display for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four live meters, grouped for classifiers that read them together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gauges {
    pub hunger: Gauge,
    pub energy: Gauge,
    pub cleanliness: Gauge,
    pub bond: Gauge,
}

impl Gauges {
    pub fn new(hunger: i64, energy: i64, cleanliness: i64, bond: i64) -> Self {
        Self {
            hunger: Gauge::new(hunger),
            energy: Gauge::new(energy),
            cleanliness: Gauge::new(cleanliness),
            bond: Gauge::new(bond),
        }
    }
}
