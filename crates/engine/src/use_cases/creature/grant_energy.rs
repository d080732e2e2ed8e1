//! Grant energy use case.
//!
//! Energy bought in the shop or gifted by an event. Payment happens in the
//! economy before this is called.

use std::sync::Arc;

use blipkin_domain::{CreatureSimulator, OwnerId};

use crate::infrastructure::locks::OwnerLocks;
use crate::infrastructure::ports::{ClockPort, CreatureRepo};

use super::error::CreatureError;
use super::types::EnergyResult;
use super::{load_creature, reconcile_logged};

pub struct GrantEnergy {
    repo: Arc<dyn CreatureRepo>,
    clock: Arc<dyn ClockPort>,
    locks: Arc<OwnerLocks>,
    simulator: Arc<CreatureSimulator>,
}

impl GrantEnergy {
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

    pub async fn execute(
        &self,
        owner_id: OwnerId,
        amount: u32,
    ) -> Result<EnergyResult, CreatureError> {
        let _guard = self.locks.acquire(owner_id).await;
        let now = self.clock.now();

        let stored = load_creature(self.repo.as_ref(), owner_id).await?;
        let reconciled = reconcile_logged(&self.simulator, &stored, now);
        let (creature, grant) = match self.simulator.grant_energy(&reconciled, amount, now) {
            Ok(granted) => granted,
            Err(e) => {
                tracing::warn!(owner_id = %owner_id, amount, error = %e, "Energy grant rejected");
                return Err(e.into());
            }
        };
        self.repo.save(&creature).await?;

        tracing::info!(
            owner_id = %owner_id,
            amount,
            energy = %grant.energy_after,
            ended_rest = grant.ended_rest,
            "Energy granted"
        );
        Ok(EnergyResult { creature, grant })
    }
}
