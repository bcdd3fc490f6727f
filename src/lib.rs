// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logic;

pub use app::GameApp;
pub use components::{Card, CardMove, GameMode, PileId, Position, Rank, Suit};
pub use config::DropLayoutConfig;
pub use error::{GameError, Result};
pub use logic::{Board, DropOutcome, Game, HistoryEntry};

// JavaScript の console.log を Rust から呼び出すための準備 (extern ブロック)。
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
}

/// `log` クレートのマクロ (`info!` など) を console.log に流すロガー。
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ::log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &::log::Metadata) -> bool {
        metadata.level() <= ::log::max_level()
    }

    fn log(&self, record: &::log::Record) {
        if self.enabled(record.metadata()) {
            console_log(&format!("[{}] {}: {}", record.level(), record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // 2 回目以降は set_logger が失敗するだけなので無視
    if ::log::set_logger(&LOGGER).is_ok() {
        ::log::set_max_level(if cfg!(debug_assertions) {
            ::log::LevelFilter::Debug
        } else {
            ::log::LevelFilter::Info
        });
    }
    console_log("Panic hook and logger set!");
}
