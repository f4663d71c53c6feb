use super::KeyValueStore;
use crate::error::{LatchkeyError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed store: each key is a file named after the key under `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(LatchkeyError::Io)?;
        }
        Ok(())
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if !is_valid_key(key) {
            return Err(LatchkeyError::Store(format!("Invalid key: '{}'", key)));
        }
        Ok(self.root.join(key))
    }
}

/// Keys become file names, so only a conservative character set is accepted.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(path).map_err(LatchkeyError::Io)?;
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|source| LatchkeyError::StorageCorrupted {
                key: key.to_string(),
                source: source.into(),
            })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(LatchkeyError::Io)?;
        fs::rename(&tmp_path, path).map_err(LatchkeyError::Io)?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(path).map_err(LatchkeyError::Io)?;
        }
        Ok(())
    }
}
