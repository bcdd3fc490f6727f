// src/logic/rules/tableau.rs
//! 場札 (column) へのカード移動ルール。

use itertools::Itertools;
use log::debug;

use crate::components::card::{Card, Rank};
use super::common::stacks_on;

/// 動かすカード列が、表向きで色違い・ランク降順の並びになってるか。
pub fn is_movable_run(cards: &[Card]) -> bool {
    !cards.is_empty()
        // 裏向きが混ざってたら動かせない
        && cards.iter().all(|card| card.is_face_up)
        // 隣り合う 2 枚ずつ (下, 上) を見て、全部が正しく重なってるか
        && cards.iter().tuple_windows().all(|(lower, upper)| stacks_on(lower, upper))
}

/// `moving` を場札の列 `column` の上に置けるかチェックする。
/// 空の列には K から始まる列だけ置ける。
pub fn can_move_to_column(column: &[Card], moving: &[Card]) -> bool {
    if !is_movable_run(moving) {
        debug!("[Column Rule] moving cards are not a face-up alternating run");
        return false;
    }
    // 列の上に重なるのは動かすカードの一番下の 1 枚
    let first = &moving[0];

    let result = match column.last() {
        // 空の列: K だけ OK 👑
        None => first.rank == Rank::King,
        // 一番上が表向きで、色違い & ランクが 1 つ下ならOK
        Some(top) => top.is_face_up && stacks_on(top, first),
    };
    debug!(
        "[Column Rule] {:?} of {:?} onto {:?}: {}",
        first.rank,
        first.suit,
        column.last().map(|top| (top.rank, top.suit)),
        result
    );
    result
}
