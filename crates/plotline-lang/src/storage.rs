use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::StorageError;

/// Where program text is loaded from and saved to.
pub trait ProgramStore {
    fn load_text(&self) -> Result<String, StorageError>;
    fn save_text(&self, text: &str) -> Result<(), StorageError>;
}

/// Program text kept in a plain file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path { &self.path }
}

impl ProgramStore for FileStore {
    fn load_text(&self) -> Result<String, StorageError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.display().to_string(),
            source,
        })?;
        info!(path = %self.path.display(), bytes = text.len(), "program loaded");
        Ok(text)
    }

    fn save_text(&self, text: &str) -> Result<(), StorageError> {
        std::fs::write(&self.path, text).map_err(|source| StorageError::Write {
            path: self.path.display().to_string(),
            source,
        })?;
        info!(path = %self.path.display(), bytes = text.len(), "program saved");
        Ok(())
    }
}
