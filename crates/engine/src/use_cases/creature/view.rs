//! View creature use case - the session check-in.

use std::sync::Arc;

use blipkin_domain::{CreatureSimulator, OwnerId};

use crate::infrastructure::locks::OwnerLocks;
use crate::infrastructure::ports::{ClockPort, CreatureRepo};

use super::error::CreatureError;
use super::types::CreatureView;
use super::{load_creature, reconcile_logged};

/// Owner opened the app: bring the creature up to date and greet them.
///
/// The reconciled state is persisted, so decay is only ever charged once.
pub struct ViewCreature {
    repo: Arc<dyn CreatureRepo>,
    clock: Arc<dyn ClockPort>,
    locks: Arc<OwnerLocks>,
    simulator: Arc<CreatureSimulator>,
}

impl ViewCreature {
    pub fn new(
        repo: Arc<dyn CreatureRepo>,
        clock: Arc<dyn ClockPort>,
        locks: Arc<OwnerLocks>,
        simulator: Arc<CreatureSimulator>,
    ) -> Self {
        Self {
            repo,
            clock,
            locks,
            simulator,
        }
    }

    pub async fn execute(&self, owner_id: OwnerId) -> Result<CreatureView, CreatureError> {
        let _guard = self.locks.acquire(owner_id).await;
        let now = self.clock.now();

        let stored = load_creature(self.repo.as_ref(), owner_id).await?;
        let reconciled = reconcile_logged(&self.simulator, &stored, now);
        let (creature, check_in) = self.simulator.check_in(&reconciled, now);
        self.repo.save(&creature).await?;

        if check_in.missed_you {
            tracing::info!(owner_id = %owner_id, "Owner returned after a long absence");
        }

        Ok(CreatureView { creature, check_in })
    }
}
