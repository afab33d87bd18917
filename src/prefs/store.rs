use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use super::keys::PrefKey;

/// Raw value held by a preference store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Text(String),
}

/// Process-wide key/value store shared by every settings row.
///
/// Lookups never fail: a missing key or a value of the wrong type reads as `None`
/// and callers substitute their default.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<PrefValue>;
    fn set(&self, key: &str, value: PrefValue);
    fn remove(&self, key: &str);

    /// Pick up writes made by other processes. Stores without a backing file
    /// have nothing to do.
    fn reload(&self) -> anyhow::Result<()> {
        Ok(())
    }

    fn get_bool(&self, key: &PrefKey) -> Option<bool> {
        match self.get(&key.to_string()) {
            Some(PrefValue::Bool(b)) => Some(b),
            _ => None,
        }
    }

    fn set_bool(&self, key: &PrefKey, value: bool) {
        self.set(&key.to_string(), PrefValue::Bool(value));
    }

    fn get_string(&self, key: &PrefKey) -> Option<String> {
        match self.get(&key.to_string()) {
            Some(PrefValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    fn set_string(&self, key: &PrefKey, value: &str) {
        self.set(&key.to_string(), PrefValue::Text(value.to_string()));
    }
}

/// In-memory store (tests, previews).
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, PrefValue>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: PrefValue) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

/// TOML-backed store living in the shared group container.
///
/// The whole file is read at open and on [`reload`](PreferenceStore::reload);
/// every write re-reads, patches and rewrites it under an exclusive lock because
/// the keyboard extension reads and writes the same file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, PrefValue>>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let values = read_values(&path)?;
        tracing::debug!(
            "preference store {} ({} keys)",
            path.display(),
            values.len()
        );
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to the on-disk values under the file lock and write them back.
    ///
    /// The file is re-read after locking so keys written by the other process
    /// since our last read are kept.
    fn persist(
        &self,
        change: &dyn Fn(&mut BTreeMap<String, PrefValue>),
    ) -> anyhow::Result<BTreeMap<String, PrefValue>> {
        let lock_path = self.path.with_extension("lock");
        let lock = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)?;
        lock.lock_exclusive()?;

        let result = read_values(&self.path).and_then(|mut fresh| {
            change(&mut fresh);
            let body = toml::to_string(&fresh)?;
            // Write to a temp file then rename so readers never see a partial file
            let tmp_path = self.path.with_extension("toml.tmp");
            let mut f = std::fs::File::create(&tmp_path)?;
            f.write_all(body.as_bytes())?;
            f.flush()?;
            std::fs::rename(&tmp_path, &self.path)?;
            Ok(fresh)
        });

        let _ = FileExt::unlock(&lock);
        result
    }

    fn update(&self, change: impl Fn(&mut BTreeMap<String, PrefValue>)) {
        let Ok(mut values) = self.values.lock() else {
            return;
        };
        match self.persist(&change) {
            Ok(fresh) => *values = fresh,
            Err(e) => {
                tracing::warn!("failed to persist preferences to {}: {}", self.path.display(), e);
                change(&mut values);
            }
        }
    }
}

fn read_values(path: &Path) -> anyhow::Result<BTreeMap<String, PrefValue>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let text = std::fs::read_to_string(path)?;
    match toml::from_str(&text) {
        Ok(values) => Ok(values),
        Err(e) => {
            tracing::warn!(
                "ignoring unreadable preference file {}: {}",
                path.display(),
                e
            );
            Ok(BTreeMap::new())
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn reload(&self) -> anyhow::Result<()> {
        let fresh = read_values(&self.path)?;
        if let Ok(mut values) = self.values.lock() {
            *values = fresh;
        }
        Ok(())
    }

    fn set(&self, key: &str, value: PrefValue) {
        self.update(|values| {
            values.insert(key.to_string(), value.clone());
        });
    }

    fn remove(&self, key: &str) {
        self.update(|values| {
            values.remove(key);
        });
    }
}
