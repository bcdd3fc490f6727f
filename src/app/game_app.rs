// src/app/game_app.rs

use log::{error, info};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::app::dom_layout::DomPileLayout;
use crate::components::game_mode::GameMode;
use crate::components::pile::PileId;
use crate::components::position::Position;
use crate::config::layout::DropLayoutConfig;
use crate::error::GameError;
use crate::logic::game::Game;

/// JS から触るゲーム本体。盤面などは全部 JSON 文字列で返すよ。
#[wasm_bindgen]
pub struct GameApp {
    game: Game,
    layout_config: DropLayoutConfig,
}

#[wasm_bindgen]
impl GameApp {
    /// `game_mode` は `"turnOne"` か `"turnThree"`。シャッフルして配った状態で始まる。
    #[wasm_bindgen(constructor)]
    pub fn new(game_mode: &str) -> Result<GameApp, JsValue> {
        let mode: GameMode = game_mode.parse()?;
        info!("GameApp: new game ({:?})", mode);
        Ok(Self {
            game: Game::deal(mode),
            layout_config: DropLayoutConfig::default(),
        })
    }

    /// ドロップ判定の調整値を JSON で上書きする。
    pub fn set_layout_config(&mut self, json: &str) -> Result<(), JsValue> {
        self.layout_config = DropLayoutConfig::from_json(json)?;
        info!("GameApp: layout config = {:?}", self.layout_config);
        Ok(())
    }

    /// 同じモードで配り直す。
    pub fn new_game(&mut self) {
        let mode = self.game.board().mode;
        self.game = Game::deal(mode);
    }

    pub fn flip_deck(&mut self) -> Result<(), JsValue> {
        Ok(self.game.flip_deck()?)
    }

    /// ドラッグ開始。掴んだカードの移動情報 (JSON) を返す。
    pub fn start_drag(&mut self, pile_id: &str, from_index: usize) -> Result<String, JsValue> {
        let source: PileId = pile_id.parse()?;
        let card_move = self.game.start_drag(source, from_index)?;
        to_json(card_move)
    }

    /// ポインタを離した位置でドロップ。座標が取れなかった時は `undefined` を渡してね。
    pub fn drop_at(&mut self, x: Option<f64>, y: Option<f64>) -> Result<String, JsValue> {
        let position = x.zip(y).map(|(x, y)| Position::new(x, y));
        let layout = DomPileLayout::from_window()
            .ok_or_else(|| JsValue::from(js_sys::Error::new("window.document is not available")))?;
        let outcome = self.game.drop_at(&layout, position, &self.layout_config)?;
        to_json(&outcome)
    }

    /// ドラッグをやめる。掴んでいたカードがあればその JSON を返す。
    pub fn cancel_drag(&mut self) -> Result<Option<String>, JsValue> {
        self.game.cancel_drag().map(|card_move| to_json(&card_move)).transpose()
    }

    /// ダブルクリック。組札へ動いたらその移動の JSON、動けなければ `undefined`。
    pub fn auto_move(&mut self, pile_id: &str) -> Result<Option<String>, JsValue> {
        let source: PileId = pile_id.parse()?;
        self.game
            .auto_move(source)?
            .map(|card_move| to_json(&card_move))
            .transpose()
    }

    pub fn undo(&mut self) -> Result<(), JsValue> {
        Ok(self.game.undo()?)
    }

    pub fn redo(&mut self) -> Result<(), JsValue> {
        Ok(self.game.redo()?)
    }

    pub fn can_undo(&self) -> bool {
        self.game.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.game.can_redo()
    }

    pub fn is_won(&self) -> bool {
        self.game.is_won()
    }

    /// 盤面全体 (山札・めくり札・場札・組札) の JSON。
    pub fn board_json(&self) -> Result<String, JsValue> {
        to_json(self.game.board())
    }

    /// Undo 用の履歴の JSON (古い順)。
    pub fn history_json(&self) -> Result<String, JsValue> {
        to_json(self.game.history())
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| {
        error!("GameApp: failed to serialize: {}", e);
        JsValue::from(GameError::from(e))
    })
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn new_game_deals_the_board() {
        let app = GameApp::new("turnThree").unwrap();
        let board: serde_json::Value = serde_json::from_str(&app.board_json().unwrap()).unwrap();
        assert_eq!(board["mode"], "turnThree");
        assert_eq!(board["deckPile"].as_array().unwrap().len(), 24);
        assert!(!app.can_undo());
        console_log!("new_game_deals_the_board テスト成功！🎉");
    }

    #[wasm_bindgen_test]
    fn bad_arguments_become_js_errors() {
        assert!(GameApp::new("turnTwo").is_err());
        let mut app = GameApp::new("turnOne").unwrap();
        assert!(app.start_drag("column9Pile", 0).is_err());
        assert!(app.set_layout_config("not json").is_err());
        assert!(app.undo().is_err());
        console_log!("bad_arguments_become_js_errors テスト成功！🎉");
    }

    #[wasm_bindgen_test]
    fn flip_and_undo() {
        let mut app = GameApp::new("turnOne").unwrap();
        app.flip_deck().unwrap();
        assert!(app.can_undo());
        app.undo().unwrap();
        assert!(app.can_redo());
        let history: serde_json::Value = serde_json::from_str(&app.history_json().unwrap()).unwrap();
        assert_eq!(history.as_array().unwrap().len(), 0);
        console_log!("flip_and_undo テスト成功！🎉");
    }

    #[wasm_bindgen_test]
    fn drop_without_position_sends_back() {
        let mut app = GameApp::new("turnOne").unwrap();
        app.flip_deck().unwrap();
        app.start_drag("flippedPile", 0).unwrap();
        let outcome: serde_json::Value =
            serde_json::from_str(&app.drop_at(None, None).unwrap()).unwrap();
        assert_eq!(outcome["kind"], "sentBack");
        console_log!("drop_without_position_sends_back テスト成功！🎉");
    }
}
