// src/logic/deal.rs
//! ゲーム開始時のカード配り。

use log::info;

use crate::components::card::Card;
use crate::components::game_mode::GameMode;
use crate::config::layout::COLUMN_COUNT;
use crate::logic::board::Board;
use crate::logic::deck::{create_standard_deck, shuffle_deck};
use crate::logic::stock;

/// 渡されたデッキを上から順に配る。
///
/// 場札の i 列目 (0 始まり) には i + 1 枚。一番上の 1 枚だけ表向き。
/// 残りは全部裏向きで山札になるよ (52 枚なら 24 枚)。
pub fn deal_board(mode: GameMode, deck: Vec<Card>) -> Board {
    let mut board = Board::empty(mode);
    let mut cards = deck.into_iter();

    for column_index in 0..COLUMN_COUNT {
        let column: Vec<Card> = cards
            .by_ref()
            .take(column_index + 1)
            .enumerate()
            .map(|(position, card)| card.turned(position == column_index))
            .collect();
        board.columns[column_index] = column;
    }

    board.deck_pile = cards.map(|card| card.turned(false)).collect();
    board.translation_y = stock::translation_y(&board.deck_pile, &board.flipped_pile);
    info!(
        "dealt {} column card(s), {} card(s) left in the deck",
        board.columns.iter().map(Vec::len).sum::<usize>(),
        board.deck_pile.len()
    );
    board
}

/// シャッフルした新しいデッキで配る。
pub fn deal_shuffled(mode: GameMode) -> Board {
    let mut deck = create_standard_deck();
    shuffle_deck(&mut deck);
    deal_board(mode, deck)
}
