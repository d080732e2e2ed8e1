//! Perform action use case.

use std::sync::Arc;

use blipkin_domain::{ActionEvent, ActionKind, CreatureSimulator, OwnerId};

use crate::infrastructure::locks::OwnerLocks;
use crate::infrastructure::ports::{
    ClockPort, CoinSource, CreatureRepo, CurrencyLedger, PromotionsPort,
};

use super::error::CreatureError;
use super::types::ActionResult;
use super::{active_multipliers, credit_coins, load_creature, reconcile_logged};

/// Feed, play, clean, rest or chat.
///
/// Orchestrates: decay, promotions, the action pipeline, persistence, and the
/// coin credit for the economy.
pub struct PerformAction {
    repo: Arc<dyn CreatureRepo>,
    ledger: Arc<dyn CurrencyLedger>,
    promotions: Arc<dyn PromotionsPort>,
    clock: Arc<dyn ClockPort>,
    locks: Arc<OwnerLocks>,
    simulator: Arc<CreatureSimulator>,
}

impl PerformAction {
    pub fn new(
        repo: Arc<dyn CreatureRepo>,
        ledger: Arc<dyn CurrencyLedger>,
        promotions: Arc<dyn PromotionsPort>,
        clock: Arc<dyn ClockPort>,
        locks: Arc<OwnerLocks>,
        simulator: Arc<CreatureSimulator>,
    ) -> Self {
        Self {
            repo,
            ledger,
            promotions,
            clock,
            locks,
            simulator,
        }
    }

    /// Execute an action.
    ///
    /// # Returns
    /// * `Ok(ActionResult)` - Applied, or refused by the rest cooldown (see
    ///   `outcome.rest`). Both are saved.
    /// * `Err(CreatureError)` - Unknown owner or storage failure
    pub async fn execute(
        &self,
        owner_id: OwnerId,
        kind: ActionKind,
    ) -> Result<ActionResult, CreatureError> {
        let _guard = self.locks.acquire(owner_id).await;
        let now = self.clock.now();

        let stored = load_creature(self.repo.as_ref(), owner_id).await?;
        let reconciled = reconcile_logged(&self.simulator, &stored, now);
        let multipliers = active_multipliers(self.promotions.as_ref(), now).await?;

        let event = ActionEvent::new(kind, now);
        let (creature, outcome) = self.simulator.apply_action(&reconciled, event, &multipliers);
        self.repo.save(&creature).await?;

        if let Some(rest) = outcome.rest {
            tracing::warn!(
                owner_id = %owner_id,
                action = %kind,
                started_resting = rest.started_resting,
                retry_after_ms = rest.retry_after_ms,
                "Action refused: creature needs rest"
            );
            return Ok(ActionResult {
                creature,
                outcome,
                balance: None,
            });
        }

        if outcome.leveled_up {
            tracing::info!(
                owner_id = %owner_id,
                level = creature.level(),
                levels_gained = outcome.levels_gained,
                "Creature leveled up"
            );
        }
        if let Some(evolution) = outcome.evolution {
            tracing::info!(
                owner_id = %owner_id,
                from = %evolution.from,
                to = %evolution.to,
                mega_form = ?evolution.mega_form,
                "Creature evolved"
            );
        }

        let balance = credit_coins(
            self.ledger.as_ref(),
            owner_id,
            outcome.coins_earned,
            CoinSource::Action { kind },
        )
        .await;

        Ok(ActionResult {
            creature,
            outcome,
            balance,
        })
    }
}
