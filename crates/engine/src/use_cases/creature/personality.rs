//! Read personality use case.
//!
//! A view: decay is applied to the copy being profiled but nothing is saved,
//! so no owner lock is taken.

use std::sync::Arc;

use blipkin_domain::{CreatureSimulator, OwnerId};

use crate::infrastructure::ports::{ClockPort, CreatureRepo};

use super::error::CreatureError;
use super::load_creature;
use super::types::PersonalityView;

pub struct ReadPersonality {
    repo: Arc<dyn CreatureRepo>,
    clock: Arc<dyn ClockPort>,
    simulator: Arc<CreatureSimulator>,
}

impl ReadPersonality {
    pub fn new(
        repo: Arc<dyn CreatureRepo>,
        clock: Arc<dyn ClockPort>,
        simulator: Arc<CreatureSimulator>,
    ) -> Self {
        Self {
            repo,
            clock,
            simulator,
        }
    }

    pub async fn execute(&self, owner_id: OwnerId) -> Result<PersonalityView, CreatureError> {
        let now = self.clock.now();
        let stored = load_creature(self.repo.as_ref(), owner_id).await?;

        let current = self.simulator.reconcile(&stored, now);
        let profile = self.simulator.personality(&current, now);

        tracing::debug!(
            owner_id = %owner_id,
            core_trait = ?profile.core_trait,
            mood_bias = ?profile.mood_bias,
            "Personality computed"
        );

        Ok(PersonalityView {
            preferred_activities: profile.preferred_activities(),
            profile,
            mood: current.mood(),
            growth_stage: current.growth_stage(),
        })
    }
}
