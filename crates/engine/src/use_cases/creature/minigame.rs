//! Submit mini-game use case.

use std::sync::Arc;

use blipkin_domain::{CreatureSimulator, MiniGame, OwnerId};

use crate::infrastructure::locks::OwnerLocks;
use crate::infrastructure::ports::{
    ClockPort, CoinSource, CreatureRepo, CurrencyLedger, PromotionsPort,
};

use super::error::CreatureError;
use super::types::MiniGameResult;
use super::{active_multipliers, credit_coins, load_creature, reconcile_logged};

/// Pay out a finished mini-game round: XP to the creature, coins to the owner.
pub struct SubmitMiniGame {
    repo: Arc<dyn CreatureRepo>,
    ledger: Arc<dyn CurrencyLedger>,
    promotions: Arc<dyn PromotionsPort>,
    clock: Arc<dyn ClockPort>,
    locks: Arc<OwnerLocks>,
    simulator: Arc<CreatureSimulator>,
}

impl SubmitMiniGame {
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

    pub async fn execute(
        &self,
        owner_id: OwnerId,
        game: MiniGame,
        score: u64,
    ) -> Result<MiniGameResult, CreatureError> {
        let _guard = self.locks.acquire(owner_id).await;
        let now = self.clock.now();

        let stored = load_creature(self.repo.as_ref(), owner_id).await?;
        let reconciled = reconcile_logged(&self.simulator, &stored, now);
        let multipliers = active_multipliers(self.promotions.as_ref(), now).await?;

        let (creature, outcome) = self
            .simulator
            .award_minigame(&reconciled, game, score, now, &multipliers);
        self.repo.save(&creature).await?;

        tracing::info!(
            owner_id = %owner_id,
            game = %game,
            score,
            xp = outcome.xp_gained,
            coins = outcome.coins_earned,
            leveled_up = outcome.leveled_up,
            "Mini-game scored"
        );
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
            CoinSource::MiniGame { game },
        )
        .await;

        Ok(MiniGameResult {
            creature,
            outcome,
            balance,
        })
    }
}
