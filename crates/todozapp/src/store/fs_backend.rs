use super::backend::StorageBackend;
use crate::error::{Result, TodozError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DEFAULT_DATA_FILE: &str = "todos.json";

pub struct FsBackend {
    root: PathBuf,
    data_file: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        if !name.trim().is_empty() {
            self.data_file = name.trim().to_string();
        }
        self
    }

    pub fn data_file(&self) -> &str {
        &self.data_file
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(TodozError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_slot(&self) -> Result<Option<String>> {
        let path = self.slot_path();
        if !path.exists() {
            return Ok(None);
        }
        let payload = fs::read_to_string(path).map_err(TodozError::Io)?;
        Ok(Some(payload))
    }

    fn write_slot(&self, payload: &str) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let target_path = self.slot_path();

        // Atomic write
        let tmp_path = self.root.join(format!(".todos-{}.tmp", Uuid::now_v7()));
        fs::write(&tmp_path, payload).map_err(TodozError::Io)?;
        fs::rename(&tmp_path, target_path).map_err(TodozError::Io)?;

        Ok(())
    }

    fn slot_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }
}
