//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Creature storage (could swap the in-memory map for a database)
//! - The coin economy and the promotions calendar
//! - Clock (for testing and transcript replay)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::CreatureRepo;

// =============================================================================
// External Collaborator Ports
// =============================================================================
pub use external::{CoinSource, CurrencyLedger, PromotionsPort};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockCurrencyLedger, MockPromotionsPort};
#[cfg(test)]
pub use repos::MockCreatureRepo;
#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
