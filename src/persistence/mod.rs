//! Save/load of the board through a [`HighscoreStore`] slot
//!
//! The slot holds a JSON array of `{name, score, date}` objects. Scores that
//! failed to parse on import are stored as `null`.
//!
//! Loading never fails: a missing slot, a storage error or malformed JSON all
//! produce an empty board and a warning.

use crate::error::Result;
use crate::highscores::HighscoreEntry;
use crate::platform::HighscoreStore;

/// Serialize a board to the slot format
pub fn encode_entries(entries: &[HighscoreEntry]) -> Result<String> {
    Ok(serde_json::to_string(entries)?)
}

/// Parse the slot format
pub fn decode_entries(json: &str) -> Result<Vec<HighscoreEntry>> {
    Ok(serde_json::from_str(json)?)
}

/// Read the board from `store`, or an empty one if there is nothing usable
pub fn load_entries<S: HighscoreStore + ?Sized>(store: &S) -> Vec<HighscoreEntry> {
    let json = match store.load() {
        Ok(Some(json)) => json,
        Ok(None) => {
            log::info!("No high scores found, starting fresh");
            return Vec::new();
        }
        Err(e) => {
            log::warn!("Failed to read high scores: {}, starting fresh", e);
            return Vec::new();
        }
    };

    match decode_entries(&json) {
        Ok(entries) => {
            log::info!("Loaded {} high scores", entries.len());
            entries
        }
        Err(e) => {
            log::warn!("Stored high scores are malformed: {}, starting fresh", e);
            Vec::new()
        }
    }
}

/// Overwrite the slot with `entries`
pub fn save_entries<S: HighscoreStore + ?Sized>(
    store: &mut S,
    entries: &[HighscoreEntry],
) -> Result<()> {
    let json = encode_entries(entries)?;
    store.save(&json)?;
    log::info!("High scores saved ({} entries)", entries.len());
    Ok(())
}
