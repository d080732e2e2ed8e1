//! Hatch creature use case.

use std::sync::Arc;

use blipkin_domain::{CreatureSnapshot, OwnerId};

use crate::infrastructure::locks::OwnerLocks;
use crate::infrastructure::ports::{ClockPort, CreatureRepo, RepoError};

use super::error::CreatureError;

/// Give an owner their first (and only) creature.
pub struct HatchCreature {
    repo: Arc<dyn CreatureRepo>,
    clock: Arc<dyn ClockPort>,
    locks: Arc<OwnerLocks>,
}

impl HatchCreature {
    pub fn new(
        repo: Arc<dyn CreatureRepo>,
        clock: Arc<dyn ClockPort>,
        locks: Arc<OwnerLocks>,
    ) -> Self {
        Self { repo, clock, locks }
    }

    pub async fn execute(&self, owner_id: OwnerId) -> Result<CreatureSnapshot, CreatureError> {
        let _guard = self.locks.acquire(owner_id).await;

        if self.repo.get_by_owner(owner_id).await?.is_some() {
            return Err(CreatureError::AlreadyHatched(owner_id));
        }

        let creature = CreatureSnapshot::hatch(owner_id, self.clock.now());
        match self.repo.insert(&creature).await {
            Ok(()) => {}
            Err(RepoError::Conflict { .. }) => {
                return Err(CreatureError::AlreadyHatched(owner_id));
            }
            Err(err) => return Err(err.into()),
        }

        tracing::info!(
            owner_id = %owner_id,
            creature_id = %creature.id(),
            mood = %creature.mood(),
            "Creature hatched"
        );
        Ok(creature)
    }
}
