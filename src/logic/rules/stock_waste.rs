// src/logic/rules/stock_waste.rs
//! 山札 (deck) とめくり札置き場 (flipped) に関するルール。

/// 山札からめくれるか。
pub fn can_flip_deck(deck_is_empty: bool) -> bool {
    !deck_is_empty
}

/// 山札が空の時に、めくり札を全部山札へ戻せるか。
pub fn can_reset_deck(deck_is_empty: bool, flipped_is_empty: bool) -> bool {
    deck_is_empty && !flipped_is_empty
}
