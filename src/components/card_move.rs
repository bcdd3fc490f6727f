// src/components/card_move.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::pile::PileId;

/// ドラッグ中 (または完了した) カード移動の情報だよ！🖱️➡️🃏
///
/// ドラッグ開始時は `target` が `None`。ドロップ先が決まって移動が通ったら
/// `target` が埋まった状態で履歴に積まれる。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardMove {
    /// 移動元のパイル
    pub source: PileId,
    /// 動かすカード (下から上の順)
    pub cards: Vec<Card>,
    /// 移動元の列で裏向きカードが表になったか
    pub movement_with_flip: bool,
    pub target: Option<PileId>,
}

impl CardMove {
    pub fn new(source: PileId, cards: Vec<Card>) -> Self {
        Self {
            source,
            cards,
            movement_with_flip: false,
            target: None,
        }
    }

    /// ドロップ先を埋めたコピーを返す。
    pub fn with_target(mut self, target: PileId) -> Self {
        self.target = Some(target);
        self
    }
}
