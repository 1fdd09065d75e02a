//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Dates for new entries
//! - Storage (LocalStorage on web, JSON files natively)
//! - File export/import (download and `File` on web, paths natively)
//! - JavaScript bindings for the browser build

pub mod files;
pub mod storage;
pub mod time;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use files::{export_highscores_to_file, import_highscores_from_file};
pub use storage::{FileStore, HighscoreStore, MemoryStore};
pub use time::{Clock, FixedClock, SystemClock};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorageStore;
#[cfg(target_arch = "wasm32")]
pub use web::WebHighscores;

/// Route `log` output to the browser console
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    let _ = console_log::init_with_level(log::Level::Info);
}
