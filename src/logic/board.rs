// src/logic/board.rs
//! 盤面 (全パイルの中身) と、それを書き換える操作。
//!
//! 山札まわりの計算は `stock` の純粋関数に任せて、ここでは結果を盤面に反映するだけ。
//! カード移動はルールチェックしてから移動元・移動先のパイルを書き換えるよ。

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::card_move::CardMove;
use crate::components::game_mode::GameMode;
use crate::components::pile::PileId;
use crate::config::layout::{COLUMN_COUNT, GOAL_COUNT};
use crate::error::{GameError, Result};
use crate::logic::rules;
use crate::logic::stock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub mode: GameMode,
    pub deck_pile: Vec<Card>,
    pub flipped_pile: Vec<Card>,
    pub columns: Vec<Vec<Card>>,
    pub goals: Vec<Vec<Card>>,
    /// めくり札置き場の縦ずらし量 (UI ヒント)
    pub translation_y: i32,
}

impl Board {
    /// カードが 1 枚もない盤面。
    pub fn empty(mode: GameMode) -> Self {
        Self {
            mode,
            deck_pile: Vec::new(),
            flipped_pile: Vec::new(),
            columns: vec![Vec::new(); COLUMN_COUNT],
            goals: vec![Vec::new(); GOAL_COUNT],
            translation_y: 0,
        }
    }

    pub fn pile(&self, pile: PileId) -> Option<&[Card]> {
        match pile {
            PileId::Deck => Some(&self.deck_pile),
            PileId::Flipped => Some(&self.flipped_pile),
            PileId::Column(index) => self.columns.get(index as usize).map(Vec::as_slice),
            PileId::Goal(index) => self.goals.get(index as usize).map(Vec::as_slice),
        }
    }

    fn pile_mut(&mut self, pile: PileId) -> Result<&mut Vec<Card>> {
        let found = match pile {
            PileId::Deck => Some(&mut self.deck_pile),
            PileId::Flipped => Some(&mut self.flipped_pile),
            PileId::Column(index) => self.columns.get_mut(index as usize),
            PileId::Goal(index) => self.goals.get_mut(index as usize),
        };
        found.ok_or_else(|| GameError::InvalidPileId(pile.dom_id()))
    }

    pub fn goal_card_count(&self) -> usize {
        self.goals.iter().map(Vec::len).sum()
    }

    pub fn is_won(&self) -> bool {
        rules::check_win_condition(self.goal_card_count())
    }

    // --- 山札 ---

    /// 山札からめくる。めくった枚数を返す。
    pub fn flip(&mut self) -> Result<usize> {
        if !rules::can_flip_deck(self.deck_pile.is_empty()) {
            return Err(GameError::EmptyPile(PileId::Deck));
        }
        let before = self.flipped_pile.len();
        let outcome = stock::flip_deck_card(&self.deck_pile, &self.flipped_pile, self.mode);
        self.deck_pile = outcome.deck_pile;
        self.flipped_pile = outcome.flipped_pile;
        self.translation_y = outcome.translation_y;
        Ok(self.flipped_pile.len() - before)
    }

    /// めくり札の上から `count` 枚を山札に戻す。
    pub fn unflip(&mut self, count: usize) {
        let outcome = stock::unflip_deck_card(&self.deck_pile, &self.flipped_pile, count);
        self.deck_pile = outcome.deck_pile;
        self.flipped_pile = outcome.flipped_pile;
        self.translation_y = outcome.translation_y;
    }

    /// 山札が空の時にめくり札を全部山札へ戻す。戻す前のめくり札を返すよ (Undo 用)。
    pub fn reset_flipped_into_deck(&mut self) -> Result<Vec<Card>> {
        if !rules::can_reset_deck(self.deck_pile.is_empty(), self.flipped_pile.is_empty()) {
            return Err(GameError::StockExhausted);
        }
        let before = self.flipped_pile.clone();
        let outcome =
            stock::reset_deck(PileId::Flipped, PileId::Deck, &self.flipped_pile, self.mode, false);
        self.flipped_pile = outcome.source_pile;
        self.deck_pile = outcome.target_pile;
        self.translation_y = outcome.translation_y as i32;
        info!("reset {} flipped card(s) back into the deck", before.len());
        Ok(before)
    }

    /// リセットを取り消す。山札は空に戻る。
    pub fn restore_flipped(&mut self, flipped_pile: Vec<Card>) {
        self.deck_pile.clear();
        self.flipped_pile = flipped_pile;
        self.translation_y = stock::translation_y(&self.deck_pile, &self.flipped_pile);
    }

    // --- ドラッグ ---

    /// `source` の `from_index` 番目から上のカードをドラッグ用に取り出す (盤面は変えない)。
    pub fn drag_selection(&self, source: PileId, from_index: usize) -> Result<CardMove> {
        let pile = self
            .pile(source)
            .ok_or_else(|| GameError::InvalidPileId(source.dom_id()))?;
        if pile.is_empty() {
            return Err(GameError::EmptyPile(source));
        }

        let cards = match source {
            PileId::Flipped => stock::set_card_dragging(pile),
            PileId::Goal(_) => pile[pile.len() - 1..].to_vec(),
            PileId::Column(_) => match pile.get(from_index..) {
                Some(run) if !run.is_empty() && run.iter().all(|card| card.is_face_up) => run.to_vec(),
                _ => return Err(GameError::NotDraggable { pile: source, index: from_index }),
            },
            PileId::Deck => return Err(GameError::NotDraggable { pile: source, index: from_index }),
        };
        Ok(CardMove::new(source, cards))
    }

    // --- カード移動 ---

    /// ルールチェックしてからカードを移動する。`target` と `movement_with_flip` を埋めた移動を返す。
    pub fn apply_move(&mut self, card_move: &CardMove) -> Result<CardMove> {
        let source = card_move.source;
        let target = card_move.target.ok_or(GameError::NotDragging)?;
        let illegal = |reason: &'static str| GameError::IllegalMove { from: source, to: target, reason };

        if source == target {
            return Err(illegal("source and target are the same pile"));
        }
        let source_pile = self
            .pile(source)
            .ok_or_else(|| GameError::InvalidPileId(source.dom_id()))?;
        let count = card_move.cards.len();
        let on_top = count > 0
            && source_pile.len() >= count
            && source_pile[source_pile.len() - count..]
                .iter()
                .zip(&card_move.cards)
                .all(|(card, moving)| card.same_card(moving));
        if !on_top {
            return Err(illegal("cards are not on top of the source pile"));
        }
        let target_pile = self
            .pile(target)
            .ok_or_else(|| GameError::InvalidPileId(target.dom_id()))?;

        // ルールは盤面上のカード (向きも盤面のもの) で判定する
        let moving = &source_pile[source_pile.len() - count..];
        let allowed = match target {
            PileId::Column(_) => rules::can_move_to_column(target_pile, moving),
            PileId::Goal(_) => rules::can_move_to_goal(target_pile, moving),
            PileId::Deck | PileId::Flipped => false,
        };
        if !allowed {
            return Err(illegal("rejected by the pile rules"));
        }

        let source_pile = self.pile_mut(source)?;
        let moved = source_pile.split_off(source_pile.len() - count);

        // 列の一番上に裏向きカードが出てきたら表にする
        let mut movement_with_flip = false;
        if source.is_column() {
            if let Some(exposed) = source_pile.last_mut() {
                if !exposed.is_face_up {
                    exposed.is_face_up = true;
                    movement_with_flip = true;
                }
            }
        }

        self.pile_mut(target)?.extend(moved.into_iter().map(|card| Card {
            flipped_from: None,
            ..card
        }));

        debug!("moved {} card(s) from {} to {} (flip: {})", count, source, target, movement_with_flip);
        Ok(CardMove {
            movement_with_flip,
            ..card_move.clone()
        })
    }

    /// `apply_move` を取り消す。移動先の上から取って移動元に戻すよ。
    pub fn revert_move(&mut self, card_move: &CardMove) -> Result<()> {
        let source = card_move.source;
        let target = card_move.target.ok_or(GameError::NotDragging)?;
        let count = card_move.cards.len();

        let target_pile = self.pile_mut(target)?;
        if target_pile.len() < count {
            warn!("cannot revert move: {} holds fewer than {} card(s)", target, count);
            return Err(GameError::EmptyPile(target));
        }
        let returned = target_pile.split_off(target_pile.len() - count);

        if card_move.movement_with_flip {
            if let Some(exposed) = self.pile_mut(source)?.last_mut() {
                exposed.is_face_up = false;
            }
        }

        match source {
            PileId::Flipped => {
                for card in returned {
                    self.flipped_pile = stock::add_card_to_flipped(&self.flipped_pile, card);
                }
            }
            _ => self.pile_mut(source)?.extend(returned),
        }
        Ok(())
    }
}
