//! Durable key-value storage for dashboard state.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};

use crate::domain::StoreError;

/// Default quota, matching what browsers grant local storage per origin.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Text-valued key-value store. Absent keys read as `None`.
pub trait Store: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

pub type SharedStore = Arc<dyn Store>;

/// In-process store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.entries).ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        lock(&self.entries)?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store persisted as a single JSON object file.
///
/// The whole object is held in memory and rewritten on every `set` through a
/// sibling temp file followed by a rename.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    quota_bytes: usize,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>, quota_bytes: usize) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let entries = Self::load(&path)?;
        log::info!(
            "Opened store {} with {} entries",
            path.display(),
            entries.len()
        );
        Ok(Self {
            path,
            quota_bytes,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                let aside = sibling(path, "corrupt");
                log::warn!(
                    "Store file {} is unreadable ({e}); moving it to {}",
                    path.display(),
                    aside.display()
                );
                fs::rename(path, &aside)?;
                Ok(BTreeMap::new())
            }
        }
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let serialized =
            serde_json::to_vec(entries).map_err(|e| StoreError::Io(e.to_string()))?;
        if serialized.len() > self.quota_bytes {
            return Err(StoreError::QuotaExceeded {
                needed: serialized.len(),
                quota: self.quota_bytes,
            });
        }

        let tmp = sibling(&self.path, "tmp");
        fs::write(&tmp, &serialized)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.entries).ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = lock(&self.entries)?;
        let previous = entries.insert(key.to_owned(), value.to_owned());
        if let Err(e) = self.write(&entries) {
            match previous {
                Some(p) => entries.insert(key.to_owned(), p),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

/// `path` with `.suffix` appended to the whole file name.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

fn lock<T>(m: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    m.lock()
        .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))
}
