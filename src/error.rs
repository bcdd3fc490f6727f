// src/error.rs
//! ゲームロジック全体で使うエラー型だよ。
//! ルール判定そのものは `bool` を返すけど、
//! 操作が失敗した理由を呼び出し側に伝えたい所はこの `GameError` を使う！

use thiserror::Error;

use crate::components::pile::PileId;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown pile id: {0:?}")]
    InvalidPileId(String),

    #[error("unknown game mode: {0:?}")]
    InvalidGameMode(String),

    #[error("invalid layout config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("illegal move from {from} to {to}: {reason}")]
    IllegalMove {
        from: PileId,
        to: PileId,
        reason: &'static str,
    },

    #[error("pile {0} has no cards to take")]
    EmptyPile(PileId),

    #[error("cards in {pile} from index {index} cannot be dragged")]
    NotDraggable { pile: PileId, index: usize },

    #[error("deck and flipped pile are both empty")]
    StockExhausted,

    #[error("no card is being dragged")]
    NotDragging,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

pub type Result<T> = std::result::Result<T, GameError>;
