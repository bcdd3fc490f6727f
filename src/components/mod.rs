// src/components/mod.rs

// ゲームに出てくるデータ部品たち！
pub mod card;
pub mod card_move;
pub mod game_mode;
pub mod pile;
pub mod position;

pub use card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use card_move::CardMove;
pub use game_mode::GameMode;
pub use pile::{PileId, COLUMN_PILES, GOAL_PILES};
pub use position::Position;
