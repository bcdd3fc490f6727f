// src/components/card.rs

use serde::{Deserialize, Serialize};

use crate::components::pile::PileId;

/// カードのスート（マーク）だよ！❤️♦️♣️♠️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

/// カードのランク。A は 1、K は 13 として扱うよ。
/// PartialOrd, Ord を付けてるので `<` `>` で大小比較できる！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// 数値としてのランク (A=1 ... K=13)。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// `other` のちょうど 1 つ上のランクかどうか。
    pub fn is_one_above(self, other: Rank) -> bool {
        self.value() == other.value() + 1
    }
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カード 1 枚を表すよ！🃏
///
/// - `is_face_up`: 表向きなら true
/// - `flipped_from`: Undo/Redo でめくり札置き場に戻されたカードに付く印。
///   どこからめくられたカードか (今は常に山札) を覚えておくんだ。
///
/// JS 側とは camelCase の JSON でやり取りするよ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flipped_from: Option<PileId>,
}

impl Card {
    /// 裏向きの新しいカードを作る。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            is_face_up: false,
            flipped_from: None,
        }
    }

    /// スートとランクが同じか (向きや印は見ない)。
    pub fn same_card(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// 向きを指定したコピーを返す。
    pub fn turned(mut self, face_up: bool) -> Self {
        self.is_face_up = face_up;
        self
    }
}
