// src/components/pile.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::layout::{COLUMN_COUNT, GOAL_COUNT};
use crate::error::GameError;

/// カードが置かれる場所 (パイル) の種類だよ。
///
/// - `Deck`: 山札
/// - `Flipped`: 山札からめくったカードの置き場
/// - `Column(i)`: 場札の列 (0..7)
/// - `Goal(i)`: 組札 (0..4)
///
/// DOM 側では各パイルが `deckPile`, `column3Pile` みたいな id の要素になってるので、
/// JSON ではその id 文字列として読み書きするよ！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum PileId {
    Deck,
    Flipped,
    Column(u8),
    Goal(u8),
}

/// ドロップ判定でチェックする順番どおりに並べた組札。
pub const GOAL_PILES: [PileId; GOAL_COUNT] =
    [PileId::Goal(0), PileId::Goal(1), PileId::Goal(2), PileId::Goal(3)];

/// ドロップ判定でチェックする順番どおりに並べた場札の列。
pub const COLUMN_PILES: [PileId; COLUMN_COUNT] = [
    PileId::Column(0),
    PileId::Column(1),
    PileId::Column(2),
    PileId::Column(3),
    PileId::Column(4),
    PileId::Column(5),
    PileId::Column(6),
];

impl PileId {
    /// パイルに対応する DOM 要素の id。列と組札は 1 始まりで数えるよ。
    pub fn dom_id(&self) -> String {
        match self {
            PileId::Deck => "deckPile".to_string(),
            PileId::Flipped => "flippedPile".to_string(),
            // 範囲外の番号 (255 など) でも溢れないように u16 で数える
            PileId::Column(index) => format!("column{}Pile", u16::from(*index) + 1),
            PileId::Goal(index) => format!("goal{}Pile", u16::from(*index) + 1),
        }
    }

    pub fn is_column(&self) -> bool {
        matches!(self, PileId::Column(_))
    }

    pub fn is_goal(&self) -> bool {
        matches!(self, PileId::Goal(_))
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dom_id())
    }
}

impl FromStr for PileId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deckPile" => return Ok(PileId::Deck),
            "flippedPile" => return Ok(PileId::Flipped),
            _ => {}
        }

        // "column3Pile" / "goal2Pile" の真ん中の数字を取り出す
        let numbered = |prefix: &str, count: usize| -> Option<u8> {
            let number: usize = s.strip_prefix(prefix)?.strip_suffix("Pile")?.parse().ok()?;
            (1..=count).contains(&number).then(|| (number - 1) as u8)
        };

        if let Some(index) = numbered("column", COLUMN_COUNT) {
            Ok(PileId::Column(index))
        } else if let Some(index) = numbered("goal", GOAL_COUNT) {
            Ok(PileId::Goal(index))
        } else {
            Err(GameError::InvalidPileId(s.to_string()))
        }
    }
}

impl TryFrom<String> for PileId {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PileId> for String {
    fn from(pile: PileId) -> Self {
        pile.dom_id()
    }
}
