//! Per-snapshot file storage
//!
//! Directory structure:
//! ~/.cashplan/
//!   config.yaml          # Active snapshot, preferences
//!   cashplan.log
//!   snapshots/
//!     default.json
//!     selling-2026.json
//!
//! Snapshot files use the same JSON shape as exported data files, so an
//! export can be imported back unchanged.

use std::fs;
use std::path::{Path, PathBuf};

use cashplan_core::model::FinancialSnapshot;
use jiff::civil::Date;

/// Snapshot used when config.yaml names none
pub const DEFAULT_SNAPSHOT: &str = "default";

/// Projection length used when no horizon is given
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

fn default_horizon_months() -> u32 {
    DEFAULT_HORIZON_MONTHS
}

/// Configuration stored in config.yaml
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DataConfig {
    /// The snapshot commands operate on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_snapshot: Option<String>,
    #[serde(default = "default_horizon_months")]
    pub default_horizon_months: u32,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            active_snapshot: None,
            default_horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

impl DataConfig {
    pub fn active_snapshot_name(&self) -> &str {
        self.active_snapshot.as_deref().unwrap_or(DEFAULT_SNAPSHOT)
    }
}

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
    NotFound(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {msg}"),
            StorageError::Parse(msg) => write!(f, "Parse error: {msg}"),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
            StorageError::NotFound(path) => write!(f, "File not found: {path}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Name of the file written by `export` when no path is given
pub fn default_export_file_name(today: Date) -> String {
    format!("financial-data-{today}.json")
}

/// Parse snapshot JSON, reporting failures as `StorageError::Parse`
fn parse_snapshot(content: &str, origin: &Path) -> Result<FinancialSnapshot, StorageError> {
    serde_json::from_str(content).map_err(|e| {
        StorageError::Parse(format!("Failed to parse {}: {e}", origin.display()))
    })
}

fn snapshot_to_json(snapshot: &FinancialSnapshot) -> Result<String, StorageError> {
    serde_json::to_string_pretty(snapshot)
        .map_err(|e| StorageError::Serialize(format!("Failed to serialize snapshot: {e}")))
}

/// Manages the data directory holding snapshots and preferences
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.cashplan/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cashplan")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    fn snapshots_dir(&self) -> PathBuf {
        self.root.join("snapshots")
    }

    fn snapshot_path(&self, name: &str) -> PathBuf {
        self.snapshots_dir()
            .join(format!("{}.json", sanitize_filename(name)))
    }

    /// Check if the data directory exists and has been initialized
    pub fn exists(&self) -> bool {
        self.root.exists() && self.snapshots_dir().exists()
    }

    /// Initialize the data directory structure
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {e}")))?;
        fs::create_dir_all(self.snapshots_dir())
            .map_err(|e| StorageError::Io(format!("Failed to create snapshots directory: {e}")))?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<DataConfig, StorageError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            return Ok(DataConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {e}")))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {e}")))
    }

    pub fn save_config(&self, config: &DataConfig) -> Result<(), StorageError> {
        if !self.exists() {
            self.init()?;
        }

        let yaml = serde_saphyr::to_string(config)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize config: {e}")))?;

        fs::write(self.config_path(), yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write config: {e}")))
    }

    /// Load a snapshot by name; a snapshot never saved loads as empty.
    pub fn load_snapshot(&self, name: &str) -> Result<FinancialSnapshot, StorageError> {
        let path = self.snapshot_path(name);
        if !path.exists() {
            tracing::debug!(snapshot = name, "no stored snapshot, starting empty");
            return Ok(FinancialSnapshot::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read snapshot: {e}")))?;
        parse_snapshot(&content, &path)
    }

    /// Save a snapshot, replacing any previous version in one rename.
    pub fn save_snapshot(&self, name: &str, snapshot: &FinancialSnapshot) -> Result<(), StorageError> {
        if !self.exists() {
            self.init()?;
        }

        let json = snapshot_to_json(snapshot)?;
        let path = self.snapshot_path(name);
        let staging = path.with_extension("json.tmp");

        fs::write(&staging, json)
            .map_err(|e| StorageError::Io(format!("Failed to write snapshot: {e}")))?;
        fs::rename(&staging, &path)
            .map_err(|e| StorageError::Io(format!("Failed to replace snapshot: {e}")))?;

        tracing::debug!(snapshot = name, path = %path.display(), "snapshot saved");
        Ok(())
    }

    /// Export a snapshot to an external file path
    pub fn export_snapshot(&self, snapshot: &FinancialSnapshot, dest: &Path) -> Result<(), StorageError> {
        let json = snapshot_to_json(snapshot)?;
        fs::write(dest, json).map_err(|e| StorageError::Io(format!("Failed to write file: {e}")))
    }

    /// Import a data file as snapshot `name`.
    ///
    /// The file is parsed in full before anything is written, so a malformed
    /// file leaves the stored snapshot untouched.
    pub fn import_snapshot(&self, name: &str, source: &Path) -> Result<FinancialSnapshot, StorageError> {
        if !source.exists() {
            return Err(StorageError::NotFound(source.display().to_string()));
        }

        let content = fs::read_to_string(source)
            .map_err(|e| StorageError::Io(format!("Failed to read file: {e}")))?;
        let snapshot = parse_snapshot(&content, source)?;

        self.save_snapshot(name, &snapshot)?;
        tracing::info!(snapshot = name, source = %source.display(), "snapshot imported");
        Ok(snapshot)
    }
}

/// Sanitize a filename to be safe for the filesystem
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
