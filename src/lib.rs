//! DevOOPS highscores - a bounded leaderboard for a single-player game
//!
//! Core modules:
//! - `highscores`: Ranked board and the CSV interchange format
//! - `persistence`: JSON slot encoding with soft-failing load
//! - `platform`: Storage, clock and file import/export (browser/native)
//! - `settings`: Capacity, storage slot and import/export options

pub mod error;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;

pub use error::{Error, Result};
pub use highscores::{HighscoreEntry, HighscoreManager};
pub use platform::{
    Clock, FileStore, FixedClock, HighscoreStore, MemoryStore, SystemClock,
    export_highscores_to_file, import_highscores_from_file,
};
pub use settings::{CsvDialect, HighscoreConfig, ImportPolicy};
