//! Persistence backends for date partitions.
//!
//! A partition is an opaque blob of text addressed by its `YYYY-MM-DD` key.
//! Backends only move those blobs around; encoding, validation and recovery
//! from corrupt content live in [`crate::db::tasks::Tasks`].

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::PathBuf;

const PARTITION_EXTENSION: &str = "json";

pub trait PartitionStorage: Send + Sync {
    /// Returns the stored content for `key`, or `None` if nothing was ever written.
    fn load(&self, key: &str) -> io::Result<Option<String>>;

    /// Replaces the stored content for `key`.
    fn save(&self, key: &str, contents: &str) -> io::Result<()>;

    /// Lists every key that currently has stored content.
    fn keys(&self) -> io::Result<Vec<String>>;
}

impl<T: PartitionStorage + ?Sized> PartitionStorage for Box<T> {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, contents: &str) -> io::Result<()> {
        (**self).save(key, contents)
    }

    fn keys(&self) -> io::Result<Vec<String>> {
        (**self).keys()
    }
}

/// One `<key>.json` file per partition inside a single directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens the storage rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn partition_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, PARTITION_EXTENSION))
    }
}

impl PartitionStorage for FileStorage {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.partition_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&self, key: &str, contents: &str) -> io::Result<()> {
        // Write next to the target and rename so readers never see a half-written file.
        let path = self.partition_path(key);
        let tmp_path = self.dir.join(format!(".{}.{}.tmp", key, PARTITION_EXTENSION));
        fs::write(&tmp_path, contents)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        Ok(())
    }

    fn keys(&self) -> io::Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(PARTITION_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                if !stem.starts_with('.') {
                    keys.push(stem.to_string());
                }
            }
        }
        Ok(keys)
    }
}

/// Keeps partitions in process memory. Used by tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    partitions: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw content without going through the task encoder.
    pub fn insert_raw(&self, key: &str, contents: &str) {
        self.partitions.lock().insert(key.to_string(), contents.to_string());
    }
}

impl PartitionStorage for MemoryStorage {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.partitions.lock().get(key).cloned())
    }

    fn save(&self, key: &str, contents: &str) -> io::Result<()> {
        self.insert_raw(key, contents);
        Ok(())
    }

    fn keys(&self) -> io::Result<Vec<String>> {
        Ok(self.partitions.lock().keys().cloned().collect())
    }
}
