//! String key-value storage, the portal's equivalent of
//! browser local storage.

use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{IntoIoError, Result, StoreError};

/// A durable string store with a single writer.
pub trait KeyValueStore: std::fmt::Debug {
    /// `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the whole value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Where `key` is kept, for stores that keep it somewhere a user
    /// can look.
    fn location(&self, _key: &str) -> Option<PathBuf> {
        None
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn location(&self, key: &str) -> Option<PathBuf> {
        (**self).location(key)
    }
}

fn check_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_owned()))
    }
}

/// Stores each key as `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens the store in `<portal_dir>/store`, creating it if needed.
    ///
    /// # Errors
    /// If the directory can't be created.
    pub fn open(portal_dir: &Path) -> Result<Self> {
        let root = portal_dir.join("store");
        std::fs::create_dir_all(&root).path(&root)?;
        Ok(Self { root })
    }

    /// Where `key` lives on disk.
    ///
    /// # Errors
    /// If `key` isn't a valid store key.
    pub fn path_of(&self, key: &str) -> Result<PathBuf> {
        check_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_of(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io { error: err, path }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_of(key)?;
        // Write-then-rename so readers never see a half-written value.
        let tmp = self.root.join(format!("{key}.json.tmp"));
        std::fs::write(&tmp, value.as_bytes()).path(&tmp)?;
        std::fs::rename(&tmp, &path).path(&path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_of(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io { error: err, path }),
        }
    }

    fn location(&self, key: &str) -> Option<PathBuf> {
        self.path_of(key).ok()
    }
}

/// In-memory store, for tests and `--ephemeral` sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    read_only: bool,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `value` under `key`.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Makes every following write fail, like a full or locked disk.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Number of successful `set` calls so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn check_writable(&self, key: &str) -> Result<()> {
        if self.read_only {
            return Err(StoreError::Io {
                error: std::io::Error::new(ErrorKind::PermissionDenied, "store is read-only"),
                path: PathBuf::from(key),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        self.check_writable(key)?;
        self.values.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        check_key(key)?;
        self.check_writable(key)?;
        self.values.remove(key);
        Ok(())
    }
}
