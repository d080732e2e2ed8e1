//! Repository port traits for creature storage.

use async_trait::async_trait;
use blipkin_domain::{CreatureSnapshot, OwnerId};

use super::error::RepoError;

// =============================================================================
// Creature Storage
// =============================================================================

/// One creature per owner.
///
/// Callers serialize read-modify-write cycles per owner (see `OwnerLocks`);
/// implementations only need each call to be atomic on its own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreatureRepo: Send + Sync {
    async fn get_by_owner(&self, owner_id: OwnerId) -> Result<Option<CreatureSnapshot>, RepoError>;

    /// Store a new creature. Fails with `RepoError::Conflict` if the owner
    /// already has one.
    async fn insert(&self, creature: &CreatureSnapshot) -> Result<(), RepoError>;

    /// Replace the owner's creature. Fails with `RepoError::NotFound` if there
    /// is nothing to replace.
    async fn save(&self, creature: &CreatureSnapshot) -> Result<(), RepoError>;
}
