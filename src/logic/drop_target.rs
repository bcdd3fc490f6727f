// src/logic/drop_target.rs
//! Resolves which pile a dragged card was dropped on.
//!
//! 画面の上の方 (高さ / 3.8 より上) は組札の段、それより下は場札の段。
//! 段が決まったら、各パイル要素の左右の端 (+ 余白) に x が入ってるかだけを見るよ。

use std::collections::HashMap;

use log::debug;

use crate::components::pile::{PileId, COLUMN_PILES, GOAL_PILES};
use crate::components::position::Position;
use crate::config::layout::DropLayoutConfig;

/// パイル要素の左右の端 (クライアント座標)。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HorizontalBounds {
    pub left: f64,
    pub right: f64,
}

impl HorizontalBounds {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// 左右に `padding` ずつ広げる。
    pub fn padded(self, padding: f64) -> Self {
        Self {
            left: self.left - padding,
            right: self.right + padding,
        }
    }

    /// 端ちょうどは含まない。
    pub fn contains(&self, x: f64) -> bool {
        x > self.left && x < self.right
    }
}

/// 「ポインタはどこに落ちたか」を調べるための、レイアウトへの唯一の問い合わせ口。
pub trait PileLayout {
    /// 表示領域の高さ (px)
    fn viewport_height(&self) -> f64;

    /// パイル要素の左右の端。要素が見つからなければ `None`。
    fn pile_bounds(&self, pile: PileId) -> Option<HorizontalBounds>;
}

/// 余白込みの当たり判定範囲。要素がない時は `{0, 0}` (何も含まない)。
pub fn pile_hit_bounds<L: PileLayout + ?Sized>(
    layout: &L,
    pile: PileId,
    config: &DropLayoutConfig,
) -> HorizontalBounds {
    layout
        .pile_bounds(pile)
        .map(|bounds| bounds.padded(config.pile_padding))
        .unwrap_or_default()
}

/// 座標 `position` に落ちたカードの行き先パイルを探す。
///
/// 組札の段で組札に当たらなかった時は、場札の段は見ずに `None`。
pub fn find_drop_target<L: PileLayout + ?Sized>(
    layout: &L,
    position: Position,
    config: &DropLayoutConfig,
) -> Option<PileId> {
    let in_goal_row = position.y < config.goal_row_limit(layout.viewport_height());
    let candidates: &[PileId] = if in_goal_row { &GOAL_PILES } else { &COLUMN_PILES };

    let target = candidates
        .iter()
        .copied()
        .find(|&pile| pile_hit_bounds(layout, pile, config).contains(position.x));
    debug!(
        "drop at ({}, {}) in {} row -> {:?}",
        position.x,
        position.y,
        if in_goal_row { "goal" } else { "column" },
        target
    );
    target
}

/// 固定の座標を持つレイアウト。DOM のないホストやテストで使う。
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    viewport_height: f64,
    bounds: HashMap<PileId, HorizontalBounds>,
}

impl StaticLayout {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            bounds: HashMap::new(),
        }
    }

    pub fn with_pile(mut self, pile: PileId, bounds: HorizontalBounds) -> Self {
        self.bounds.insert(pile, bounds);
        self
    }

    /// 左端 `left` から幅 `width`、間隔 `gap` で等間隔に並べる。
    pub fn with_row(mut self, piles: &[PileId], left: f64, width: f64, gap: f64) -> Self {
        for (index, &pile) in piles.iter().enumerate() {
            let start = left + index as f64 * (width + gap);
            self.bounds.insert(pile, HorizontalBounds::new(start, start + width));
        }
        self
    }
}

impl PileLayout for StaticLayout {
    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn pile_bounds(&self, pile: PileId) -> Option<HorizontalBounds> {
        self.bounds.get(&pile).copied()
    }
}
