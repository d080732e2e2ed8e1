//! Mini-game payouts

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MiniGame {
    FruitCatch,
    BubblePop,
    Fishing,
    /// Score is the number of moves; fewer pays more
    Memory,
    /// Score is the distance run
    Dash,
}

impl MiniGame {
    pub fn all() -> [MiniGame; 5] {
        [
            MiniGame::FruitCatch,
            MiniGame::BubblePop,
            MiniGame::Fishing,
            MiniGame::Memory,
            MiniGame::Dash,
        ]
    }

    pub fn base_xp(&self) -> u64 {
        match self {
            MiniGame::FruitCatch => 10,
            MiniGame::BubblePop => 15,
            MiniGame::Fishing => 20,
            MiniGame::Memory => 25,
            MiniGame::Dash => 30,
        }
    }

    pub fn coins_for(&self, score: u64) -> u64 {
        match self {
            MiniGame::FruitCatch => score.saturating_mul(2),
            MiniGame::BubblePop | MiniGame::Fishing => score,
            MiniGame::Memory => 20u64.saturating_sub(score) * 10,
            MiniGame::Dash => score.saturating_mul(5),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MiniGame::FruitCatch => "fruit_catch",
            MiniGame::BubblePop => "bubble_pop",
            MiniGame::Fishing => "fishing",
            MiniGame::Memory => "memory",
            MiniGame::Dash => "dash",
        }
    }
}

impl fmt::Display for MiniGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MiniGame {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|game| game.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::invalid_input(format!("unknown mini-game: {}", s)))
    }
}
