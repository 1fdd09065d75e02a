//! Leaderboard configuration
//!
//! Persisted as a small JSON file next to the highscore slot.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default number of entries kept on the board
pub const DEFAULT_MAX_SCORES: usize = 10;
/// Default storage slot holding the serialized board
pub const DEFAULT_STORAGE_KEY: &str = "devOOPSHighscores";
/// Default filename offered by CSV export
pub const DEFAULT_EXPORT_FILENAME: &str = "highscore.csv";

/// How CSV rows with a non-numeric score are treated on import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ImportPolicy {
    /// Keep the row with no score; it ranks below every numeric score
    #[default]
    Permissive,
    /// Skip the row and leave it out of the imported count
    Strict,
}

impl ImportPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportPolicy::Permissive => "Permissive",
            ImportPolicy::Strict => "Strict",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "permissive" | "lenient" => Some(ImportPolicy::Permissive),
            "strict" => Some(ImportPolicy::Strict),
            _ => None,
        }
    }
}

/// Field quoting rules of the CSV interchange format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CsvDialect {
    /// Fields joined by commas as-is; names must not contain commas
    #[default]
    Plain,
    /// RFC 4180 quoting for fields with commas, quotes or line breaks
    Quoted,
}

impl CsvDialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            CsvDialect::Plain => "Plain",
            CsvDialect::Quoted => "Quoted",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "plain" => Some(CsvDialect::Plain),
            "quoted" | "rfc4180" => Some(CsvDialect::Quoted),
            _ => None,
        }
    }
}

/// Highscore board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighscoreConfig {
    /// Maximum entries kept after any insert or import
    pub max_scores: usize,
    /// Storage slot (LocalStorage key, or file stem for file stores)
    pub storage_key: String,
    /// Treatment of non-numeric scores on import
    pub import_policy: ImportPolicy,
    /// CSV quoting rules for export and import
    pub csv_dialect: CsvDialect,
    /// Filename used when export is not given one
    pub export_filename: String,
}

impl Default for HighscoreConfig {
    fn default() -> Self {
        Self {
            max_scores: DEFAULT_MAX_SCORES,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            import_policy: ImportPolicy::Permissive,
            csv_dialect: CsvDialect::Plain,
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

impl HighscoreConfig {
    /// Default config with a different capacity
    pub fn with_max_scores(max_scores: usize) -> Self {
        Self {
            max_scores,
            ..Self::default()
        }
    }

    /// Load config from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) if e.is_not_found() => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to load config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save config as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HighscoreConfig::default();
        assert_eq!(config.max_scores, 10);
        assert_eq!(config.storage_key, "devOOPSHighscores");
        assert_eq!(config.import_policy, ImportPolicy::Permissive);
        assert_eq!(config.csv_dialect, CsvDialect::Plain);
        assert_eq!(config.export_filename, "highscore.csv");
    }

    #[test]
    fn test_enum_names() {
        assert_eq!(ImportPolicy::from_str("STRICT"), Some(ImportPolicy::Strict));
        assert_eq!(ImportPolicy::from_str("lenient"), Some(ImportPolicy::Permissive));
        assert_eq!(ImportPolicy::from_str("nope"), None);
        assert_eq!(CsvDialect::from_str("rfc4180"), Some(CsvDialect::Quoted));
        assert_eq!(CsvDialect::from_str(CsvDialect::Plain.as_str()), Some(CsvDialect::Plain));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: HighscoreConfig =
            serde_json::from_str(r#"{"max_scores": 3, "import_policy": "Strict"}"#).unwrap();
        assert_eq!(config.max_scores, 3);
        assert_eq!(config.import_policy, ImportPolicy::Strict);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_load_missing_and_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(HighscoreConfig::load(&path), HighscoreConfig::default());

        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(HighscoreConfig::load(&path), HighscoreConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = HighscoreConfig::with_max_scores(5);
        config.csv_dialect = CsvDialect::Quoted;
        config.save(&path).unwrap();
        assert_eq!(HighscoreConfig::load(&path), config);
    }
}
