//! Creature use cases.
//!
//! Each mutating use case runs load -> reconcile -> mutate -> save while
//! holding the owner's lock, so concurrent requests for one owner apply in
//! some serial order and none is lost.

mod error;
mod grant_energy;
mod hatch;
mod minigame;
mod perform_action;
mod personality;
mod types;
mod view;

#[cfg(test)]
mod fixtures;

use std::sync::Arc;

use blipkin_domain::{CreatureSimulator, CreatureSnapshot, EventMultipliers, OwnerId};
use chrono::{DateTime, Utc};

use crate::infrastructure::ports::{CoinSource, CreatureRepo, CurrencyLedger, PromotionsPort};

pub use error::CreatureError;
pub use grant_energy::GrantEnergy;
pub use hatch::HatchCreature;
pub use minigame::SubmitMiniGame;
pub use perform_action::PerformAction;
pub use personality::ReadPersonality;
pub use types::{ActionResult, CreatureView, EnergyResult, MiniGameResult, PersonalityView};
pub use view::ViewCreature;

/// Container for creature use cases.
pub struct CreatureUseCases {
    pub hatch: Arc<HatchCreature>,
    pub view: Arc<ViewCreature>,
    pub perform_action: Arc<PerformAction>,
    pub grant_energy: Arc<GrantEnergy>,
    pub minigame: Arc<SubmitMiniGame>,
    pub personality: Arc<ReadPersonality>,
}

async fn load_creature(
    repo: &dyn CreatureRepo,
    owner_id: OwnerId,
) -> Result<CreatureSnapshot, CreatureError> {
    repo.get_by_owner(owner_id)
        .await?
        .ok_or(CreatureError::NotFound(owner_id))
}

/// Reconcile, logging any decay that was applied.
fn reconcile_logged(
    simulator: &CreatureSimulator,
    snapshot: &CreatureSnapshot,
    now: DateTime<Utc>,
) -> CreatureSnapshot {
    let (reconciled, report) = simulator.reconcile_with_report(snapshot, now);
    if let Some(report) = report {
        tracing::debug!(
            owner_id = %snapshot.owner_id(),
            hours = report.hours_elapsed,
            hunger = report.hunger_gained,
            energy = -report.energy_lost,
            cleanliness = -report.cleanliness_lost,
            missed_feeds = report.missed_feeds,
            "Applied time decay"
        );
    }
    reconciled
}

async fn active_multipliers(
    promotions: &dyn PromotionsPort,
    now: DateTime<Utc>,
) -> Result<EventMultipliers, CreatureError> {
    let keys = promotions.active_at(now).await?;
    Ok(EventMultipliers::from_promotions(&keys))
}

/// Credit earned coins, returning the new balance.
///
/// The creature is already saved by the time coins are paid, so a ledger
/// failure is logged rather than surfaced. Nothing is credited for zero coins.
async fn credit_coins(
    ledger: &dyn CurrencyLedger,
    owner_id: OwnerId,
    amount: u64,
    source: CoinSource,
) -> Option<u64> {
    if amount == 0 {
        return None;
    }
    match ledger.credit(owner_id, amount, source).await {
        Ok(balance) => Some(balance),
        Err(e) => {
            tracing::warn!(owner_id = %owner_id, amount, error = %e, "Failed to credit coins");
            None
        }
    }
}
