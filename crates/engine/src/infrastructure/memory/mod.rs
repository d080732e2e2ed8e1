//! In-memory adapters for every storage port.
//!
//! Used by the replay binary and by integration tests.

mod creature_repo;
mod ledger;
mod promotions;

pub use creature_repo::InMemoryCreatureRepo;
pub use ledger::InMemoryLedger;
pub use promotions::{InMemoryPromotions, PromotionWindow};
