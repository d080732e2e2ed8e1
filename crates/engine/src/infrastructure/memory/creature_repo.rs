//! In-memory creature storage.

use async_trait::async_trait;
use blipkin_domain::{CreatureSnapshot, OwnerId};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::infrastructure::ports::{CreatureRepo, RepoError};

/// Creatures keyed by owner.
#[derive(Default)]
pub struct InMemoryCreatureRepo {
    creatures: DashMap<OwnerId, CreatureSnapshot>,
}

impl InMemoryCreatureRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

#[async_trait]
impl CreatureRepo for InMemoryCreatureRepo {
    async fn get_by_owner(&self, owner_id: OwnerId) -> Result<Option<CreatureSnapshot>, RepoError> {
        Ok(self.creatures.get(&owner_id).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, creature: &CreatureSnapshot) -> Result<(), RepoError> {
        match self.creatures.entry(creature.owner_id()) {
            Entry::Occupied(_) => Err(RepoError::conflict("Creature", creature.owner_id())),
            Entry::Vacant(slot) => {
                slot.insert(creature.clone());
                Ok(())
            }
        }
    }

    async fn save(&self, creature: &CreatureSnapshot) -> Result<(), RepoError> {
        match self.creatures.get_mut(&creature.owner_id()) {
            Some(mut stored) => {
                *stored = creature.clone();
                Ok(())
            }
            None => Err(RepoError::not_found("Creature", creature.owner_id())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn hatchling(owner_id: OwnerId) -> CreatureSnapshot {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        CreatureSnapshot::hatch(owner_id, now)
    }

    #[tokio::test]
    async fn insert_then_get() {
        let repo = InMemoryCreatureRepo::new();
        let owner = OwnerId::new();
        let creature = hatchling(owner);

        repo.insert(&creature).await.unwrap();

        assert_eq!(repo.get_by_owner(owner).await.unwrap(), Some(creature));
        assert_eq!(repo.get_by_owner(OwnerId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn second_insert_for_owner_conflicts() {
        let repo = InMemoryCreatureRepo::new();
        let owner = OwnerId::new();
        repo.insert(&hatchling(owner)).await.unwrap();

        let err = repo.insert(&hatchling(owner)).await.unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn save_requires_an_existing_creature() {
        let repo = InMemoryCreatureRepo::new();

        let err = repo.save(&hatchling(OwnerId::new())).await.unwrap_err();

        assert!(err.is_not_found());
        assert!(repo.is_empty());
    }
}
