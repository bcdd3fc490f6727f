// src/config/mod.rs

pub mod layout;

pub use layout::DropLayoutConfig;
