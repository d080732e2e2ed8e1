//! Application state and composition.

use std::sync::Arc;

use blipkin_domain::{CreatureSimulator, SimulationConfig};

use crate::infrastructure::{
    locks::OwnerLocks,
    memory::{InMemoryCreatureRepo, InMemoryLedger, InMemoryPromotions},
    ports::{ClockPort, CreatureRepo, CurrencyLedger, PromotionsPort},
};
use crate::use_cases::creature::{
    CreatureUseCases, GrantEnergy, HatchCreature, PerformAction, ReadPersonality,
    SubmitMiniGame, ViewCreature,
};

/// Main application state.
///
/// Holds the ports and the use cases built on them.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for all ports.
pub struct Repositories {
    pub creature: Arc<dyn CreatureRepo>,
    pub ledger: Arc<dyn CurrencyLedger>,
    pub promotions: Arc<dyn PromotionsPort>,
    pub clock: Arc<dyn ClockPort>,
}

/// Container for all use cases.
pub struct UseCases {
    pub creature: CreatureUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repositories: Repositories, config: SimulationConfig) -> Self {
        let simulator = Arc::new(CreatureSimulator::new(config));
        let locks = Arc::new(OwnerLocks::new());

        let Repositories {
            creature: repo,
            ledger,
            promotions,
            clock,
        } = &repositories;

        let creature = CreatureUseCases {
            hatch: Arc::new(HatchCreature::new(repo.clone(), clock.clone(), locks.clone())),
            view: Arc::new(ViewCreature::new(
                repo.clone(),
                clock.clone(),
                locks.clone(),
                simulator.clone(),
            )),
            perform_action: Arc::new(PerformAction::new(
                repo.clone(),
                ledger.clone(),
                promotions.clone(),
                clock.clone(),
                locks.clone(),
                simulator.clone(),
            )),
            grant_energy: Arc::new(GrantEnergy::new(
                repo.clone(),
                clock.clone(),
                locks.clone(),
                simulator.clone(),
            )),
            minigame: Arc::new(SubmitMiniGame::new(
                repo.clone(),
                ledger.clone(),
                promotions.clone(),
                clock.clone(),
                locks,
                simulator.clone(),
            )),
            personality: Arc::new(ReadPersonality::new(repo.clone(), clock.clone(), simulator)),
        };

        Self {
            repositories,
            use_cases: UseCases { creature },
        }
    }
}

/// The in-memory adapters, kept concretely typed for callers that need to
/// seed them.
pub struct InMemoryAdapters {
    pub creatures: Arc<InMemoryCreatureRepo>,
    pub ledger: Arc<InMemoryLedger>,
    pub promotions: Arc<InMemoryPromotions>,
}

impl InMemoryAdapters {
    pub fn new() -> Self {
        Self {
            creatures: Arc::new(InMemoryCreatureRepo::new()),
            ledger: Arc::new(InMemoryLedger::new()),
            promotions: Arc::new(InMemoryPromotions::new()),
        }
    }

    pub fn repositories(&self, clock: Arc<dyn ClockPort>) -> Repositories {
        Repositories {
            creature: self.creatures.clone(),
            ledger: self.ledger.clone(),
            promotions: self.promotions.clone(),
            clock,
        }
    }
}

impl Default for InMemoryAdapters {
    fn default() -> Self {
        Self::new()
    }
}
