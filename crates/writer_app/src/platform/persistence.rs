use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use writer_engine::{AtomicFileWriter, MemoryStore, PersistError};
use writer_logging::{writer_info, writer_warn};

const SETTINGS_FILENAME: &str = ".writer500_settings.ron";
const SETTINGS_DIR_VAR: &str = "WRITER500_SETTINGS_DIR";

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("failed to read settings from {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse settings from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// `$WRITER500_SETTINGS_DIR`, else the current directory.
pub(crate) fn settings_dir() -> PathBuf {
    match std::env::var_os(SETTINGS_DIR_VAR) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Reads the settings file; `Ok(None)` when there is none yet.
pub(crate) fn read_settings(dir: &Path) -> Result<Option<MemoryStore>, SettingsError> {
    let path = dir.join(SETTINGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(SettingsError::Read { path, source }),
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|source| SettingsError::Parse { path, source })
}

/// Like `read_settings`, but any failure degrades to an empty store.
pub(crate) fn load_settings(dir: &Path) -> MemoryStore {
    match read_settings(dir) {
        Ok(Some(store)) => {
            writer_info!("Loaded {} settings from {:?}", store.len(), dir);
            store
        }
        Ok(None) => {
            writer_info!("No settings file in {:?}; using defaults", dir);
            MemoryStore::new()
        }
        Err(err) => {
            writer_warn!("{}; using defaults", err);
            MemoryStore::new()
        }
    }
}

pub(crate) fn save_settings(dir: &Path, store: &MemoryStore) -> Result<PathBuf, SettingsError> {
    let pretty = ron::ser::PrettyConfig::new();
    let content = ron::ser::to_string_pretty(store, pretty)?;

    let writer = AtomicFileWriter::new(dir.to_path_buf());
    Ok(writer.write(SETTINGS_FILENAME, &content)?)
}
