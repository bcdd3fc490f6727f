// src/logic/rules/foundation.rs
//! 組札 (goal) へのカード移動ルール。

use log::debug;

use crate::components::card::{Card, Rank};

/// `moving` を組札 `goal` に置けるかチェックする。
///
/// 組札には 1 枚ずつしか置けない。空なら A、そうでなければ同じスートで 1 つ上のランク。
/// どの組札にどのスートを積むかは決めてないよ (最初に置いた A のスートになる)。
pub fn can_move_to_goal(goal: &[Card], moving: &[Card]) -> bool {
    // ちょうど 1 枚、しかも表向きのカードだけ受け付ける
    let card = match moving {
        [card] if card.is_face_up => card,
        _ => {
            debug!("[Goal Rule] goal piles take exactly one face-up card, got {}", moving.len());
            return false;
        }
    };

    let result = match goal.last() {
        // 空の組札には A から
        None => card.rank == Rank::Ace,
        // 積まれてるなら同じスートの次のランク
        Some(top) => top.suit == card.suit && card.rank.is_one_above(top.rank),
    };
    debug!("[Goal Rule] {:?} of {:?} onto {:?}: {}", card.rank, card.suit, goal.last(), result);
    result
}
