//! Key-value slot holding the serialized board
//!
//! The manager only ever reads or overwrites the whole slot, so a store is a
//! single optional text value.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// A single persisted text slot
pub trait HighscoreStore {
    /// Current slot contents, `None` if nothing was ever saved
    fn load(&self) -> Result<Option<String>>;

    /// Overwrite the slot
    fn save(&mut self, text: &str) -> Result<()>;
}

impl<S: HighscoreStore + ?Sized> HighscoreStore for Box<S> {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn save(&mut self, text: &str) -> Result<()> {
        (**self).save(text)
    }
}

/// In-process slot, used by tests and as a fallback when no storage exists
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `text`
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            slot: Some(text.into()),
            writes: 0,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    /// Number of `save` calls seen
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl HighscoreStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, text: &str) -> Result<()> {
        self.slot = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Slot stored as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// Store backed by an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighscoreStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Write aside then rename so a crash never leaves a half-written slot
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, text)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Browser LocalStorage slot
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| crate::Error::Storage("LocalStorage unavailable".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl HighscoreStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| crate::Error::Storage(format!("{e:?}")))
    }

    fn save(&mut self, text: &str) -> Result<()> {
        Self::storage()?
            .set_item(&self.key, text)
            .map_err(|e| crate::Error::Storage(format!("{e:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save("[]").unwrap();
        store.save("[1]").unwrap();
        assert_eq!(store.contents(), Some("[1]"));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn test_file_store_missing_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path(), "board");
        assert_eq!(store.path(), dir.path().join("board.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("data"), "board");
        store.save("first").unwrap();
        store.save("second").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("second"));
        assert!(!dir.path().join("data").join("board.json.tmp").exists());
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn HighscoreStore> = Box::new(MemoryStore::with_contents("x"));
        assert_eq!(store.load().unwrap().as_deref(), Some("x"));
        store.save("y").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("y"));
    }
}
