// src/logic/game.rs
//! 1 回分のゲーム進行。盤面 + ドラッグ中の移動 + Undo/Redo の履歴を持つよ。

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::card_move::CardMove;
use crate::components::game_mode::GameMode;
use crate::components::pile::PileId;
use crate::components::position::Position;
use crate::config::layout::DropLayoutConfig;
use crate::error::{GameError, Result};
use crate::logic::auto_move;
use crate::logic::board::Board;
use crate::logic::deal;
use crate::logic::drop_target::{self, PileLayout};

/// 履歴に積む操作。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum HistoryEntry {
    /// 山札から `count` 枚めくった
    Flip { count: usize },
    /// めくり札を山札に戻した。戻す前のめくり札を覚えておく
    Reset { flipped_pile: Vec<Card> },
    /// カードを動かした (`target` 入り)
    Move { card_move: CardMove },
}

/// ドロップの結果。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DropOutcome {
    /// 移動成功。`card_move` は履歴に積んだものと同じ
    Moved { card_move: CardMove },
    /// ドロップ先がない or ルール違反。カードは元の場所に戻る
    SentBack { card_move: CardMove },
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    dragging: Option<CardMove>,
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            dragging: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// シャッフルして配った新しいゲーム。
    pub fn deal(mode: GameMode) -> Self {
        Self::new(deal::deal_shuffled(mode))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dragging(&self) -> Option<&CardMove> {
        self.dragging.as_ref()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.undo_stack
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    fn record(&mut self, entry: HistoryEntry) {
        self.undo_stack.push(entry);
        self.redo_stack.clear();
    }

    /// 山札をクリックした時の処理。山札があればめくり、空ならめくり札を戻す。
    pub fn flip_deck(&mut self) -> Result<()> {
        self.dragging = None;
        let entry = if !self.board.deck_pile.is_empty() {
            let count = self.board.flip()?;
            HistoryEntry::Flip { count }
        } else {
            let flipped_pile = self.board.reset_flipped_into_deck()?;
            HistoryEntry::Reset { flipped_pile }
        };
        self.record(entry);
        Ok(())
    }

    /// ドラッグ開始。`from_index` は場札の列でだけ意味がある。
    pub fn start_drag(&mut self, source: PileId, from_index: usize) -> Result<&CardMove> {
        let selection = self.board.drag_selection(source, from_index)?;
        info!("dragging {} card(s) from {}", selection.cards.len(), source);
        Ok(self.dragging.insert(selection))
    }

    pub fn cancel_drag(&mut self) -> Option<CardMove> {
        self.dragging.take()
    }

    /// ドラッグ中のカードを `target` に落とす。`None` はどのパイルにも落ちなかった時。
    pub fn drop_cards(&mut self, target: Option<PileId>) -> Result<DropOutcome> {
        let card_move = self.dragging.take().ok_or(GameError::NotDragging)?;

        let Some(target) = target else {
            info!("no drop target, sending {} card(s) back to {}", card_move.cards.len(), card_move.source);
            return Ok(DropOutcome::SentBack { card_move });
        };

        match self.board.apply_move(&card_move.clone().with_target(target)) {
            Ok(done) => {
                self.record(HistoryEntry::Move { card_move: done.clone() });
                Ok(DropOutcome::Moved { card_move: done })
            }
            Err(err) => {
                info!("send back: {}", err);
                Ok(DropOutcome::SentBack { card_move })
            }
        }
    }

    /// ポインタを離した位置でドロップを処理する。位置が取れなかった時は原点扱い。
    pub fn drop_at<L: PileLayout + ?Sized>(
        &mut self,
        layout: &L,
        position: Option<Position>,
        config: &DropLayoutConfig,
    ) -> Result<DropOutcome> {
        if self.dragging.is_none() {
            return Err(GameError::NotDragging);
        }
        let target = drop_target::find_drop_target(layout, Position::from(position), config);
        match target {
            Some(PileId::Column(index)) => info!("drop on column {}", index + 1),
            Some(PileId::Goal(index)) => info!("drop on goal {}", index + 1),
            _ => {}
        }
        self.drop_cards(target)
    }

    /// ダブルクリック: 一番上のカードを置ける組札があれば動かして履歴に積む。
    pub fn auto_move(&mut self, source: PileId) -> Result<Option<CardMove>> {
        let Some(target) = auto_move::find_automatic_goal_move(&self.board, source) else {
            return Ok(None);
        };
        let top_index = self.board.pile(source).map_or(0, |pile| pile.len().saturating_sub(1));
        let card_move = self.board.drag_selection(source, top_index)?.with_target(target);
        let done = self.board.apply_move(&card_move)?;
        self.dragging = None;
        self.record(HistoryEntry::Move { card_move: done.clone() });
        Ok(Some(done))
    }

    pub fn undo(&mut self) -> Result<()> {
        let entry = self.undo_stack.pop().ok_or(GameError::NothingToUndo)?;
        self.dragging = None;

        match &entry {
            HistoryEntry::Flip { count } => self.board.unflip(*count),
            HistoryEntry::Reset { flipped_pile } => self.board.restore_flipped(flipped_pile.clone()),
            HistoryEntry::Move { card_move } => {
                if let Err(err) = self.board.revert_move(card_move) {
                    warn!("undo failed: {}", err);
                    self.undo_stack.push(entry);
                    return Err(err);
                }
            }
        }
        self.redo_stack.push(entry);
        Ok(())
    }

    pub fn redo(&mut self) -> Result<()> {
        let entry = self.redo_stack.pop().ok_or(GameError::NothingToRedo)?;
        self.dragging = None;

        let replayed = match &entry {
            HistoryEntry::Flip { .. } => self.board.flip().map(|count| HistoryEntry::Flip { count }),
            HistoryEntry::Reset { .. } => self
                .board
                .reset_flipped_into_deck()
                .map(|flipped_pile| HistoryEntry::Reset { flipped_pile }),
            HistoryEntry::Move { card_move } => self
                .board
                .apply_move(card_move)
                .map(|card_move| HistoryEntry::Move { card_move }),
        };

        match replayed {
            Ok(done) => {
                self.undo_stack.push(done);
                Ok(())
            }
            Err(err) => {
                warn!("redo failed: {}", err);
                self.redo_stack.push(entry);
                Err(err)
            }
        }
    }
}
