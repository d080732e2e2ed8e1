//! Growth stages and mega forms
//!
//! Stage is a pure function of level. The mega form is chosen once, on entry
//! to the `Mega` bracket, from the ratios of lifetime care actions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::CareHistory;

/// Life-cycle bracket, ordered from youngest to oldest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    #[default]
    Baby,
    Child,
    Teen,
    Adult,
    Mega,
    Elder,
}

impl GrowthStage {
    pub fn all() -> [GrowthStage; 6] {
        [
            GrowthStage::Baby,
            GrowthStage::Child,
            GrowthStage::Teen,
            GrowthStage::Adult,
            GrowthStage::Mega,
            GrowthStage::Elder,
        ]
    }

    /// Lowest level (inclusive) of this bracket.
    pub fn min_level(&self) -> u32 {
        match self {
            GrowthStage::Baby => 1,
            GrowthStage::Child => 6,
            GrowthStage::Teen => 16,
            GrowthStage::Adult => 31,
            GrowthStage::Mega => 51,
            GrowthStage::Elder => 100,
        }
    }

    /// The stage a creature of `level` belongs in.
    pub fn for_level(level: u32) -> Self {
        Self::all()
            .into_iter()
            .rev()
            .find(|stage| level >= stage.min_level())
            .unwrap_or(GrowthStage::Baby)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::Baby => "baby",
            GrowthStage::Child => "child",
            GrowthStage::Teen => "teen",
            GrowthStage::Adult => "adult",
            GrowthStage::Mega => "mega",
            GrowthStage::Elder => "elder",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GrowthStage::Baby => "Baby Blipkin",
            GrowthStage::Child => "Child Blipkin",
            GrowthStage::Teen => "Teen Blipkin",
            GrowthStage::Adult => "Adult Blipkin",
            GrowthStage::Mega => "Mega Blipkin",
            GrowthStage::Elder => "Elder Blipkin",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GrowthStage::Baby => "Your Blipkin has just hatched!",
            GrowthStage::Child => "Your Blipkin is learning and growing!",
            GrowthStage::Teen => "Your Blipkin is full of energy!",
            GrowthStage::Adult => "Your Blipkin has fully matured!",
            GrowthStage::Mega => "Your Blipkin has evolved to its ultimate form!",
            GrowthStage::Elder => "Your Blipkin has achieved legendary status!",
        }
    }
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GrowthStage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown growth stage: {}", s)))
    }
}

/// Terminal-stage archetype shaped by care style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MegaForm {
    Nurturer,
    Explorer,
    Chaos,
    Calm,
}

/// Per-form scores from [`MegaForm::scores`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MegaFormScores {
    pub nurturer: f64,
    pub explorer: f64,
    pub chaos: f64,
    pub calm: f64,
}

impl MegaFormScores {
    /// Highest scoring form. Ties keep the earlier form in
    /// nurturer, explorer, chaos, calm order.
    pub fn best(&self) -> MegaForm {
        let mut best = (MegaForm::Nurturer, self.nurturer);
        for candidate in [
            (MegaForm::Explorer, self.explorer),
            (MegaForm::Chaos, self.chaos),
            (MegaForm::Calm, self.calm),
        ] {
            if candidate.1 > best.1 {
                best = candidate;
            }
        }
        best.0
    }
}

impl MegaForm {
    pub fn all() -> [MegaForm; 4] {
        [
            MegaForm::Nurturer,
            MegaForm::Explorer,
            MegaForm::Chaos,
            MegaForm::Calm,
        ]
    }

    /// Score every form from care ratios. `None` when there is no care history.
    pub fn scores(history: &CareHistory) -> Option<MegaFormScores> {
        let total = history.total_care();
        if total == 0 {
            return None;
        }

        let ratio = |count: u64| count as f64 / total as f64;
        let feeds = ratio(history.total_feeds);
        let plays = ratio(history.total_plays);
        let cleans = ratio(history.total_cleans);
        let rests = ratio(history.total_rests);

        Some(MegaFormScores {
            nurturer: feeds * 2.0 + cleans + rests,
            explorer: plays * 3.0 + feeds * 0.5,
            chaos: plays * 2.0 + feeds * 1.5 + (1.0 - cleans) * 2.0,
            calm: rests * 2.5 + cleans * 2.0,
        })
    }

    /// Pick the form for a creature entering the mega bracket.
    pub fn from_care(history: &CareHistory) -> Self {
        Self::scores(history)
            .map(|scores| scores.best())
            .unwrap_or(MegaForm::Nurturer)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MegaForm::Nurturer => "nurturer",
            MegaForm::Explorer => "explorer",
            MegaForm::Chaos => "chaos",
            MegaForm::Calm => "calm",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MegaForm::Nurturer => "Nurturer",
            MegaForm::Explorer => "Explorer",
            MegaForm::Chaos => "Chaos",
            MegaForm::Calm => "Calm",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MegaForm::Nurturer => "Born from love and care",
            MegaForm::Explorer => "Always seeking new experiences",
            MegaForm::Chaos => "Unpredictable and wild",
            MegaForm::Calm => "Zen and balanced",
        }
    }

    /// Theme color as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            MegaForm::Nurturer => "#FF6EC7",
            MegaForm::Explorer => "#FFD93D",
            MegaForm::Chaos => "#A855F7",
            MegaForm::Calm => "#00D9FF",
        }
    }
}

impl fmt::Display for MegaForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MegaForm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|form| form.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown mega form: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(feeds: u64, plays: u64, cleans: u64, rests: u64) -> CareHistory {
        CareHistory {
            total_feeds: feeds,
            total_plays: plays,
            total_cleans: cleans,
            total_rests: rests,
            total_chats: 0,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn stage_brackets_are_inclusive() {
        assert_eq!(GrowthStage::for_level(1), GrowthStage::Baby);
        assert_eq!(GrowthStage::for_level(5), GrowthStage::Baby);
        assert_eq!(GrowthStage::for_level(6), GrowthStage::Child);
        assert_eq!(GrowthStage::for_level(15), GrowthStage::Child);
        assert_eq!(GrowthStage::for_level(16), GrowthStage::Teen);
        assert_eq!(GrowthStage::for_level(30), GrowthStage::Teen);
        assert_eq!(GrowthStage::for_level(31), GrowthStage::Adult);
        assert_eq!(GrowthStage::for_level(50), GrowthStage::Adult);
        assert_eq!(GrowthStage::for_level(51), GrowthStage::Mega);
        assert_eq!(GrowthStage::for_level(99), GrowthStage::Mega);
        assert_eq!(GrowthStage::for_level(100), GrowthStage::Elder);
        assert_eq!(GrowthStage::for_level(5000), GrowthStage::Elder);
    }

    #[test]
    fn stage_never_regresses_as_level_rises() {
        let mut previous = GrowthStage::for_level(1);
        for level in 1..=150 {
            let stage = GrowthStage::for_level(level);
            assert!(stage >= previous);
            previous = stage;
        }
    }

    #[test]
    fn scores_match_weighted_ratios() {
        let scores = MegaForm::scores(&history(40, 30, 20, 10)).unwrap();
        assert!(close(scores.nurturer, 1.1));
        assert!(close(scores.explorer, 1.1));
        assert!(close(scores.chaos, 2.8));
        assert!(close(scores.calm, 0.65));
        assert_eq!(scores.best(), MegaForm::Chaos);
    }

    #[test]
    fn no_care_defaults_to_nurturer() {
        assert!(MegaForm::scores(&CareHistory::default()).is_none());
        assert_eq!(MegaForm::from_care(&CareHistory::default()), MegaForm::Nurturer);
    }

    #[test]
    fn chats_do_not_count_toward_care() {
        let mut care = history(0, 0, 0, 0);
        care.total_chats = 500;
        assert_eq!(MegaForm::from_care(&care), MegaForm::Nurturer);
    }

    #[test]
    fn heavy_rest_and_clean_is_calm() {
        assert_eq!(MegaForm::from_care(&history(0, 0, 10, 10)), MegaForm::Calm);
    }

    #[test]
    fn ties_keep_enumeration_order() {
        let scores = MegaFormScores {
            nurturer: 1.0,
            explorer: 2.0,
            chaos: 2.0,
            calm: 2.0,
        };
        assert_eq!(scores.best(), MegaForm::Explorer);
    }

    #[test]
    fn test_stage_parse() {
        assert_eq!("Mega".parse::<GrowthStage>().unwrap(), GrowthStage::Mega);
        assert!("larva".parse::<GrowthStage>().is_err());
        assert_eq!("calm".parse::<MegaForm>().unwrap(), MegaForm::Calm);
    }
}
