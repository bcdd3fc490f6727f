// src/logic/auto_move.rs
//! ダブルクリックでカードを組札へ自動移動するためのロジックだよ！🪄

use log::debug;

use crate::components::pile::{PileId, GOAL_PILES};
use crate::logic::board::Board;
use crate::logic::rules;

/// `source` の一番上のカードを置ける組札を、左から順に探す。
/// 見つからなければ `None`。
///
/// 組札から組札への移し替えはしないので、`source` が組札なら常に `None`。
pub fn find_automatic_goal_move(board: &Board, source: PileId) -> Option<PileId> {
    if source.is_goal() {
        return None;
    }
    let pile = board.pile(source)?;
    let top = pile.last()?;
    if !top.is_face_up {
        return None;
    }

    let moving = std::slice::from_ref(top);
    let found = GOAL_PILES.iter().copied().find(|&goal| {
        board
            .pile(goal)
            .is_some_and(|goal_pile| rules::can_move_to_goal(goal_pile, moving))
    });
    debug!("[AutoMove] {:?} of {:?} from {} -> {:?}", top.rank, top.suit, source, found);
    found
}
