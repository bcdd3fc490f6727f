// src/logic/stock.rs
//! 山札 (deck pile) とめくり札置き場 (flipped pile) の間でカードを動かす純粋関数たち。
//!
//! どの関数も引数のパイルには触らず、新しい Vec を作って返すよ。
//! パイルの並びは「下 → 上」で、末尾が一番上のカード。

use log::debug;

use crate::components::card::Card;
use crate::components::game_mode::GameMode;
use crate::components::pile::PileId;
use crate::config::layout::TURN_THREE_CHUNK;

/// めくり後の状態。`start_redo_animation` は Redo アニメーションの起動フラグを下ろす合図。
#[derive(Debug, Clone, PartialEq)]
pub struct FlipOutcome {
    pub deck_pile: Vec<Card>,
    pub flipped_pile: Vec<Card>,
    pub translation_y: i32,
    pub start_redo_animation: bool,
}

/// めくりを戻した後の状態。
#[derive(Debug, Clone, PartialEq)]
pub struct UnflipOutcome {
    pub deck_pile: Vec<Card>,
    pub flipped_pile: Vec<Card>,
    pub translation_y: i32,
    pub start_undo_animation: bool,
}

/// 山札リセット後の状態。`source_pile` は常に空。
#[derive(Debug, Clone, PartialEq)]
pub struct ResetOutcome {
    pub source: PileId,
    pub target: PileId,
    pub source_pile: Vec<Card>,
    pub target_pile: Vec<Card>,
    pub translation_y: usize,
}

/// 山札とめくり札の枚数差。めくり札置き場の縦方向のずらし量に使う。
pub fn translation_y(deck_pile: &[Card], flipped_pile: &[Card]) -> i32 {
    deck_pile.len() as i32 - flipped_pile.len() as i32
}

/// 山札の上から 1 枚 (3 枚めくりなら 3 枚) を表にしてめくり札置き場に積む。
/// 山札が足りなければあるだけ動かす。山札での並び順はそのまま。
pub fn flip_deck_card(deck_pile: &[Card], flipped_pile: &[Card], mode: GameMode) -> FlipOutcome {
    let split_at = deck_pile.len().saturating_sub(mode.cards_per_flip());
    let (remaining, drawn) = deck_pile.split_at(split_at);

    let mut flipped = flipped_pile.to_vec();
    flipped.extend(drawn.iter().cloned().map(|card| card.turned(true)));
    let deck = remaining.to_vec();

    debug!("flipped {} card(s) from the deck ({:?})", drawn.len(), mode);
    FlipOutcome {
        translation_y: translation_y(&deck, &flipped),
        deck_pile: deck,
        flipped_pile: flipped,
        start_redo_animation: false,
    }
}

/// `flip_deck_card` の逆。めくり札の上から `count` 枚を同じ並びのまま山札へ戻し、裏向きにする。
pub fn unflip_deck_card(deck_pile: &[Card], flipped_pile: &[Card], count: usize) -> UnflipOutcome {
    let split_at = flipped_pile.len().saturating_sub(count);
    let (kept, returned) = flipped_pile.split_at(split_at);

    let mut deck = deck_pile.to_vec();
    deck.extend(returned.iter().cloned().map(|card| card.turned(false)));
    let flipped = kept.to_vec();

    debug!("returned {} card(s) to the deck", returned.len());
    UnflipOutcome {
        translation_y: translation_y(&deck, &flipped),
        deck_pile: deck,
        flipped_pile: flipped,
        start_undo_animation: false,
    }
}

/// `source` のカードを全部 `target` に移す。
///
/// 移した先がめくり札置き場なら表向き、それ以外は裏向きになる。
/// 3 枚めくりモードでは、まず下から 3 枚ずつ区切ってそれぞれを反転させる。
/// `reversed` が false なら最後に全体を反転 (一番上のカードが一番下になる)。
pub fn reset_deck(
    source: PileId,
    target: PileId,
    source_pile: &[Card],
    mode: GameMode,
    reversed: bool,
) -> ResetOutcome {
    let face_up = target == PileId::Flipped;
    let mut cards: Vec<Card> = source_pile
        .iter()
        .cloned()
        .map(|card| card.turned(face_up))
        .collect();

    if mode == GameMode::TurnThree {
        cards = reverse_chunks(&cards, TURN_THREE_CHUNK);
    }
    if !reversed {
        cards.reverse();
    }

    debug!("reset {} card(s) from {} to {}", source_pile.len(), source, target);
    ResetOutcome {
        source,
        target,
        source_pile: Vec::new(),
        target_pile: cards,
        translation_y: source_pile.len(),
    }
}

/// 先頭から `chunk_size` 個ずつ区切り、それぞれのまとまりの中身を反転する。
/// 端数のまとまりも同じように反転。`chunk_size` が 0 なら何もしない。
pub fn reverse_chunks<T: Clone>(items: &[T], chunk_size: usize) -> Vec<T> {
    if chunk_size == 0 {
        return items.to_vec();
    }
    items
        .chunks(chunk_size)
        .flat_map(|chunk| chunk.iter().rev().cloned())
        .collect()
}

/// めくり札置き場からドラッグされるカード (= 一番上の 1 枚)。空なら空。
pub fn set_card_dragging(flipped_pile: &[Card]) -> Vec<Card> {
    flipped_pile.last().cloned().into_iter().collect()
}

/// Undo/Redo でめくり札置き場にカードを 1 枚戻す。山札から来たカードとして印を付ける。
pub fn add_card_to_flipped(flipped_pile: &[Card], card: Card) -> Vec<Card> {
    let mut flipped = flipped_pile.to_vec();
    flipped.push(Card {
        flipped_from: Some(PileId::Deck),
        ..card
    });
    flipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use Rank::*;

    fn spades(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&rank| Card::new(Suit::Spade, rank)).collect()
    }

    fn ranks(pile: &[Card]) -> Vec<Rank> {
        pile.iter().map(|card| card.rank).collect()
    }

    #[test]
    fn translation_is_signed_difference() {
        assert_eq!(translation_y(&spades(&[Ace, Two]), &spades(&[Three])), 1);
        assert_eq!(translation_y(&[], &spades(&[Three, Four])), -2);
        println!("translation_is_signed_difference テスト成功！🎉");
    }

    #[test]
    fn flip_one_moves_top_card_face_up() {
        let deck = spades(&[Ace, Two, Three]);
        let outcome = flip_deck_card(&deck, &[], GameMode::TurnOne);

        assert_eq!(ranks(&outcome.deck_pile), vec![Ace, Two]);
        assert_eq!(ranks(&outcome.flipped_pile), vec![Three]);
        assert!(outcome.flipped_pile[0].is_face_up);
        assert_eq!(outcome.translation_y, 1);
        assert!(!outcome.start_redo_animation);
        // 元のパイルはそのまま
        assert_eq!(deck.len(), 3);
        println!("flip_one_moves_top_card_face_up テスト成功！🎉");
    }

    #[test]
    fn flip_three_keeps_deck_order() {
        let deck = spades(&[Ace, Two, Three, Four, Five]);
        let flipped = spades(&[King]);
        let outcome = flip_deck_card(&deck, &flipped, GameMode::TurnThree);

        assert_eq!(ranks(&outcome.deck_pile), vec![Ace, Two]);
        assert_eq!(ranks(&outcome.flipped_pile), vec![King, Three, Four, Five]);
        assert_eq!(outcome.translation_y, -2);
        println!("flip_three_keeps_deck_order テスト成功！🎉");
    }

    #[test]
    fn flip_three_with_short_deck_takes_what_is_left() {
        let outcome = flip_deck_card(&spades(&[Ace, Two]), &[], GameMode::TurnThree);
        assert!(outcome.deck_pile.is_empty());
        assert_eq!(ranks(&outcome.flipped_pile), vec![Ace, Two]);
        println!("flip_three_with_short_deck_takes_what_is_left テスト成功！🎉");
    }

    #[test]
    fn flip_on_empty_deck_changes_nothing() {
        let flipped = spades(&[Queen]);
        let outcome = flip_deck_card(&[], &flipped, GameMode::TurnOne);
        assert!(outcome.deck_pile.is_empty());
        assert_eq!(outcome.flipped_pile, flipped);
        println!("flip_on_empty_deck_changes_nothing テスト成功！🎉");
    }

    #[test]
    fn unflip_reverses_a_flip() {
        let deck = spades(&[Ace, Two, Three, Four, Five]);
        let flipped = flip_deck_card(&deck, &[], GameMode::TurnThree);
        let back = unflip_deck_card(&flipped.deck_pile, &flipped.flipped_pile, 3);

        assert_eq!(back.deck_pile, deck);
        assert!(back.flipped_pile.is_empty());
        assert_eq!(back.translation_y, 5);
        assert!(!back.start_undo_animation);
        println!("unflip_reverses_a_flip テスト成功！🎉");
    }

    #[test]
    fn unflip_zero_or_too_many() {
        let flipped = spades(&[Ace, Two]);
        let none = unflip_deck_card(&[], &flipped, 0);
        assert_eq!(none.flipped_pile, flipped);
        assert!(none.deck_pile.is_empty());

        let all = unflip_deck_card(&[], &flipped, 10);
        assert!(all.flipped_pile.is_empty());
        assert_eq!(ranks(&all.deck_pile), vec![Ace, Two]);
        println!("unflip_zero_or_too_many テスト成功！🎉");
    }

    #[test]
    fn reset_turn_one_reverses_into_face_down_deck() {
        let flipped: Vec<Card> = spades(&[Ace, Two, Three])
            .into_iter()
            .map(|card| card.turned(true))
            .collect();
        let outcome = reset_deck(PileId::Flipped, PileId::Deck, &flipped, GameMode::TurnOne, false);

        assert_eq!(outcome.source, PileId::Flipped);
        assert_eq!(outcome.target, PileId::Deck);
        assert!(outcome.source_pile.is_empty());
        assert_eq!(ranks(&outcome.target_pile), vec![Three, Two, Ace]);
        assert!(outcome.target_pile.iter().all(|card| !card.is_face_up));
        assert_eq!(outcome.translation_y, 3);
        println!("reset_turn_one_reverses_into_face_down_deck テスト成功！🎉");
    }

    #[test]
    fn reset_turn_three_chunks_before_reversing() {
        let flipped = spades(&[Ace, Two, Three, Four, Five, Six, Seven]);
        let outcome = reset_deck(PileId::Flipped, PileId::Deck, &flipped, GameMode::TurnThree, false);
        // チャンク反転: [3,2,A, 6,5,4, 7] → 全体反転
        assert_eq!(
            ranks(&outcome.target_pile),
            vec![Seven, Four, Five, Six, Ace, Two, Three]
        );
        println!("reset_turn_three_chunks_before_reversing テスト成功！🎉");
    }

    #[test]
    fn reset_reversed_keeps_chunked_order_and_faces_up_for_flipped_target() {
        let deck = spades(&[Ace, Two, Three, Four]);
        let outcome = reset_deck(PileId::Deck, PileId::Flipped, &deck, GameMode::TurnThree, true);
        assert_eq!(ranks(&outcome.target_pile), vec![Three, Two, Ace, Four]);
        assert!(outcome.target_pile.iter().all(|card| card.is_face_up));
        println!("reset_reversed_keeps_chunked_order_and_faces_up_for_flipped_target テスト成功！🎉");
    }

    #[test]
    fn reset_then_flip_replays_the_same_draws() {
        let flipped: Vec<Card> = spades(&[Ace, Two, Three, Four, Five, Six])
            .into_iter()
            .map(|card| card.turned(true))
            .collect();
        let reset = reset_deck(PileId::Flipped, PileId::Deck, &flipped, GameMode::TurnThree, false);
        let first = flip_deck_card(&reset.target_pile, &[], GameMode::TurnThree);
        assert_eq!(ranks(&first.flipped_pile), vec![Ace, Two, Three]);
        let second = flip_deck_card(&first.deck_pile, &first.flipped_pile, GameMode::TurnThree);
        assert_eq!(ranks(&second.flipped_pile), vec![Ace, Two, Three, Four, Five, Six]);
        println!("reset_then_flip_replays_the_same_draws テスト成功！🎉");
    }

    #[test]
    fn reverse_chunks_handles_remainders_and_zero() {
        assert_eq!(reverse_chunks(&[1, 2, 3, 4, 5], 3), vec![3, 2, 1, 5, 4]);
        assert_eq!(reverse_chunks(&[1, 2, 3], 1), vec![1, 2, 3]);
        assert_eq!(reverse_chunks(&[1, 2], 0), vec![1, 2]);
        assert!(reverse_chunks::<u8>(&[], 3).is_empty());
        println!("reverse_chunks_handles_remainders_and_zero テスト成功！🎉");
    }

    #[test]
    fn dragging_takes_only_the_top_card() {
        let flipped = spades(&[Ace, Two, Three]);
        assert_eq!(ranks(&set_card_dragging(&flipped)), vec![Three]);
        assert!(set_card_dragging(&[]).is_empty());
        println!("dragging_takes_only_the_top_card テスト成功！🎉");
    }

    #[test]
    fn added_card_is_marked_as_coming_from_deck() {
        let flipped = spades(&[Ace]);
        let pile = add_card_to_flipped(&flipped, Card::new(Suit::Heart, Rank::Nine).turned(true));
        assert_eq!(pile.len(), 2);
        assert_eq!(pile[1].rank, Nine);
        assert_eq!(pile[1].flipped_from, Some(PileId::Deck));
        assert_eq!(pile[0].flipped_from, None);
        println!("added_card_is_marked_as_coming_from_deck テスト成功！🎉");
    }
}
