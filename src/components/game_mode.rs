// src/components/game_mode.rs

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// 山札を 1 枚ずつめくるか、3 枚ずつめくるか。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameMode {
    #[default]
    TurnOne,
    TurnThree,
}

impl GameMode {
    /// 1 回のめくりで山札から移るカードの枚数。
    pub fn cards_per_flip(self) -> usize {
        match self {
            GameMode::TurnOne => 1,
            GameMode::TurnThree => 3,
        }
    }
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "turnOne" => Ok(GameMode::TurnOne),
            "turnThree" => Ok(GameMode::TurnThree),
            other => Err(GameError::InvalidGameMode(other.to_string())),
        }
    }
}
