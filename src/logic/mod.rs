// src/logic/mod.rs
//! 盤面の状態遷移とルール判定。DOM には一切触らないよ。

pub mod auto_move;
pub mod board;
pub mod deal;
pub mod deck;
pub mod drop_target;
pub mod game;
pub mod rules;
pub mod stock;

pub use board::Board;
pub use drop_target::{find_drop_target, HorizontalBounds, PileLayout, StaticLayout};
pub use game::{DropOutcome, Game, HistoryEntry};
