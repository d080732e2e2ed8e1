//! Per-owner serialization.
//!
//! Every use case that reads, reconciles and writes a creature holds the
//! owner's lock for the whole cycle, so two concurrent requests for the same
//! owner can never interleave and lose an update. Different owners never
//! contend. An owner's entry is pruned once its last guard drops with nobody
//! waiting, so the registry only holds owners with requests in flight.

use std::sync::Arc;

use blipkin_domain::OwnerId;
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = DashMap<OwnerId, Arc<Mutex<()>>>;

/// Registry of async mutexes, one per owner with requests in flight.
#[derive(Default)]
pub struct OwnerLocks {
    locks: Arc<LockMap>,
}

impl OwnerLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `owner_id`'s creature.
    pub async fn acquire(&self, owner_id: OwnerId) -> OwnerGuard {
        // Clone the Arc out so the map shard is not held across the await
        let lock = self.locks.entry(owner_id).or_default().clone();
        OwnerGuard {
            guard: Some(lock.lock_owned().await),
            owner_id,
            locks: self.locks.clone(),
        }
    }

    /// Number of owners currently holding or waiting on a lock.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

/// Exclusive access to one owner's creature, released on drop.
#[must_use = "the owner lock is released as soon as the guard is dropped"]
pub struct OwnerGuard {
    guard: Option<OwnedMutexGuard<()>>,
    owner_id: OwnerId,
    locks: Arc<LockMap>,
}

impl Drop for OwnerGuard {
    fn drop(&mut self) {
        drop(self.guard.take());
        // `acquire` clones under the same shard lock, so a count of one means
        // no holder or waiter is left
        self.locks
            .remove_if(&self.owner_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}
