use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, trace};

use super::{KeyValueStore, StoreError};

type Entries = BTreeMap<String, String>;

/// Keeps the entries in a JSON object on disk, like a browser keeps its per-origin storage.
///
/// The file is read on every access and rewritten on every change, so several stores may point
/// at the same file. They aren't synchronized: the last write wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Entries::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                trace!("{:?} doesn't exist yet, treating it as empty", self.path);
                Ok(Entries::new())
            }
            Err(error) => Err(error.into()),
        }
    }

    fn temporary_path(&self) -> PathBuf {
        let mut path = self.path.clone().into_os_string();
        path.push(".tmp");
        path.into()
    }

    /// Replaces the whole file at once, so a write that dies midway leaves the old contents
    fn write_entries(&self, entries: &Entries) -> Result<(), StoreError> {
        let temporary_path = self.temporary_path();
        fs::write(&temporary_path, serde_json::to_string_pretty(entries)?)?;
        fs::rename(&temporary_path, &self.path)?;
        debug!("Saved {} entries to {:?}", entries.len(), self.path);
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    type Error = StoreError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), Self::Error> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
