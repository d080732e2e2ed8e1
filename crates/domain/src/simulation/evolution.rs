//! Evolution classifier

use super::CreatureSimulator;
use crate::aggregates::CreatureSnapshot;
use crate::events::Evolution;
use crate::value_objects::{GrowthStage, MegaForm};

/// The stage transition due for the creature's level, if any.
///
/// Only forward transitions are reported. Entering `Mega` scores the care
/// history to pick the mega form; skipping straight past it does not.
pub fn check_for_evolution(snapshot: &CreatureSnapshot) -> Option<Evolution> {
    let target = GrowthStage::for_level(snapshot.level());
    let current = snapshot.growth_stage();
    if target <= current {
        return None;
    }

    let mega_form = (target == GrowthStage::Mega && snapshot.mega_form().is_none())
        .then(|| MegaForm::from_care(snapshot.care()));

    Some(Evolution {
        from: current,
        to: target,
        mega_form,
    })
}

impl CreatureSimulator {
    pub(crate) fn evolve(&self, snapshot: &mut CreatureSnapshot) -> Option<Evolution> {
        let evolution = check_for_evolution(snapshot)?;
        snapshot.advance_stage(evolution.to, evolution.mega_form);
        Some(evolution)
    }
}
