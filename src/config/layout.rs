// src/config/layout.rs
//! 盤面レイアウトとドロップ判定に関する定数だよ！
//! ホスト (JS) 側から値を変えたい時は `DropLayoutConfig` を JSON で渡してね。

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const COLUMN_COUNT: usize = 7; // 場札の列の数
pub const GOAL_COUNT: usize = 4; // 組札の数
pub const DECK_SIZE: usize = 52;

pub const PILE_PADDING: f64 = 5.0; // パイル要素の左右に足す当たり判定の余白 (px)
pub const GOAL_ROW_HEIGHT_DIVISOR: f64 = 3.8; // 画面の高さ / これ より上が組札の段

pub const TURN_THREE_CHUNK: usize = 3; // 3 枚めくりモードで山札を戻す時のまとまり

/// ドロップ判定の調整値。省略したフィールドは定数のデフォルトになるよ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropLayoutConfig {
    pub pile_padding: f64,
    pub goal_row_height_divisor: f64,
}

impl Default for DropLayoutConfig {
    fn default() -> Self {
        Self {
            pile_padding: PILE_PADDING,
            goal_row_height_divisor: GOAL_ROW_HEIGHT_DIVISOR,
        }
    }
}

impl DropLayoutConfig {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// この y より上 (小さい) なら組札の段。
    pub fn goal_row_limit(&self, viewport_height: f64) -> f64 {
        viewport_height / self.goal_row_height_divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = DropLayoutConfig::from_json("{}").unwrap();
        assert_eq!(config, DropLayoutConfig::default());
        assert_eq!(config.pile_padding, 5.0);
        println!("empty_json_gives_defaults テスト成功！🎉");
    }

    #[test]
    fn partial_override() {
        let config = DropLayoutConfig::from_json(r#"{"pilePadding": 12.5}"#).unwrap();
        assert_eq!(config.pile_padding, 12.5);
        assert_eq!(config.goal_row_height_divisor, GOAL_ROW_HEIGHT_DIVISOR);
        println!("partial_override テスト成功！🎉");
    }

    #[test]
    fn broken_json_is_a_config_error() {
        assert!(matches!(
            DropLayoutConfig::from_json("{pilePadding"),
            Err(GameError::Config(_))
        ));
        println!("broken_json_is_a_config_error テスト成功！🎉");
    }

    #[test]
    fn goal_row_limit_uses_divisor() {
        let config = DropLayoutConfig::default();
        assert!((config.goal_row_limit(760.0) - 200.0).abs() < 1e-9);
        println!("goal_row_limit_uses_divisor テスト成功！🎉");
    }
}
