// src/components/position.rs

use serde::{Deserialize, Serialize};

/// 画面 (クライアント座標) 上のポインタ位置だよ！📍
/// DOM の座標は f64 で来るので、そのまま f64 で持つ。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Option<Position>> for Position {
    /// ドロップ位置が取れなかった時は原点扱い。
    fn from(position: Option<Position>) -> Self {
        position.unwrap_or_default()
    }
}
