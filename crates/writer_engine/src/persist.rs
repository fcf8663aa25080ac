use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use writer_logging::writer_debug;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("settings directory missing or not writable: {0}")]
    SettingsDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure the settings directory exists and accepts new files; create it if missing.
pub fn ensure_settings_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::SettingsDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::SettingsDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::SettingsDir(e.to_string()))?;
    }
    NamedTempFile::new_in(dir).map_err(|e| PersistError::SettingsDir(e.to_string()))?;
    Ok(())
}

/// Writes `{dir}/{filename}` through a temp file and a rename, so readers never see half a file.
#[derive(Debug, Clone)]
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_settings_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        writer_debug!("Wrote {} bytes to {:?}", content.len(), target);
        Ok(target)
    }
}
