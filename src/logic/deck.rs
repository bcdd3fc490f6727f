// src/logic/deck.rs

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::layout::DECK_SIZE;

/// 52 枚の標準デッキを作る。全部裏向きだよ。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// OS の乱数でデッキをシャッフル。
pub fn shuffle_deck(deck: &mut [Card]) {
    shuffle_deck_with(deck, &mut thread_rng());
}

/// 乱数生成器を指定してシャッフル (テストでシードを固定したい時用)。
pub fn shuffle_deck_with<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}
