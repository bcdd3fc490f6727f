// src/logic/rules/win_condition.rs
//! ゲームの勝利条件。

use crate::config::layout::DECK_SIZE;

/// 全部のカードが組札に乗っていればクリア！🏆
pub fn check_win_condition(goal_card_count: usize) -> bool {
    goal_card_count == DECK_SIZE
}
