// src/app/mod.rs
//! ブラウザ (JS) との境目。DOM を読むのと wasm に公開する API はここだけ。

pub mod dom_layout;
pub mod game_app;

pub use dom_layout::DomPileLayout;
pub use game_app::GameApp;
