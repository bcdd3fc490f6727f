// src/logic/rules/common.rs
//! ルール判定で共通して使うヘルパーだよ。

use crate::components::card::{Card, Suit};

/// カードの色 (赤か黒か)。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red, // ❤️♦️ は赤
            Suit::Club | Suit::Spade => CardColor::Black,  // ♣️♠️ は黒
        }
    }

    /// カードそのものから色を求めるショートカット。
    pub fn of(card: &Card) -> Self {
        Self::from_suit(card.suit)
    }
}

/// `upper` が `lower` の上に場札ルールで重ねられるか (色違い & ランクが 1 つ下)。
pub(crate) fn stacks_on(lower: &Card, upper: &Card) -> bool {
    CardColor::of(lower) != CardColor::of(upper) && lower.rank.is_one_above(upper.rank)
}
