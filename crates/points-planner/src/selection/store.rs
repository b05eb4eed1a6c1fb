use super::{AirportCodes, Selection, SelectionField};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;
use tracing::warn;

/// Key/value storage for persisted selections.
pub trait SelectionStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<Value>, StoreError>;
    fn write(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("selection store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("selection store holds malformed data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("selection store unavailable: {0}")]
    Unavailable(String),
}

/// Reads and decodes a key, falling back to `default` on absence or any failure.
pub fn load_or_default<T: DeserializeOwned>(store: &dyn SelectionStore, key: &str, default: T) -> T {
    match store.read(key) {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!(key, error = %err, "stored selection is malformed, using default");
                default
            }
        },
        Ok(None) => default,
        Err(err) => {
            warn!(key, error = %err, "selection store read failed, using default");
            default
        }
    }
}

/// Encodes and writes a key; failures are logged and dropped.
pub fn save_best_effort<T: Serialize + ?Sized>(store: &dyn SelectionStore, key: &str, value: &T) {
    let result = serde_json::to_value(value)
        .map_err(StoreError::from)
        .and_then(|encoded| store.write(key, encoded));

    if let Err(err) = result {
        warn!(key, error = %err, "selection store write failed");
    }
}

impl Selection {
    /// Restores the last saved selection field by field, using defaults for anything unusable.
    pub fn load(store: &dyn SelectionStore) -> Self {
        let defaults = Selection::defaults();
        let list = |field: SelectionField| {
            load_or_default(store, field.storage_key(), defaults.values(field).to_vec())
        };

        let airports = load_or_default(
            store,
            SelectionField::Airports.storage_key(),
            AirportCodes::Many(defaults.home_airports.clone()),
        )
        .into_vec();

        Selection::new(
            list(SelectionField::Cards),
            list(SelectionField::Alliances),
            list(SelectionField::Hotels),
            airports,
        )
    }

    pub fn save(&self, store: &dyn SelectionStore) {
        for field in SelectionField::ALL {
            save_best_effort(store, field.storage_key(), self.values(field));
        }
    }
}

/// Process-local store; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemorySelectionStore {
    entries: Mutex<BTreeMap<String, Value>>,
}

impl SelectionStore for MemorySelectionStore {
    fn read(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let guard = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store mutex poisoned".to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn write(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store mutex poisoned".to_string()))?;
        guard.insert(key.to_string(), value);
        Ok(())
    }
}

/// Single JSON object on disk mapping storage keys to values.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, Value>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

impl SelectionStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn write(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Unavailable("file store lock poisoned".to_string()))?;

        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StoreError::Malformed(err)) => {
                warn!(path = %self.path.display(), error = %err, "discarding malformed selection file");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), value);

        let parent = match self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };
        let mut staging = NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&mut staging, &entries)?;
        staging.as_file().sync_all()?;
        staging
            .persist(&self.path)
            .map_err(|err| StoreError::Io(err.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct BrokenStore;

    impl SelectionStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<Value>, StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }

        fn write(&self, _key: &str, _value: Value) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }
    }

    #[test]
    fn empty_store_loads_defaults() {
        let store = MemorySelectionStore::default();
        assert_eq!(Selection::load(&store), Selection::defaults());
    }

    #[test]
    fn failing_store_loads_defaults_and_ignores_saves() {
        let store = BrokenStore;
        assert_eq!(Selection::load(&store), Selection::defaults());
        Selection::defaults().save(&store);
    }

    #[test]
    fn malformed_field_falls_back_per_key() {
        let store = MemorySelectionStore::default();
        store
            .write("ps.cards", json!({ "not": "a list" }))
            .expect("write succeeds");
        store
            .write("ps.hotels", json!(["ihg"]))
            .expect("write succeeds");

        let selection = Selection::load(&store);
        assert_eq!(selection.cards(), Selection::defaults().cards());
        assert_eq!(selection.hotels(), ["ihg"]);
    }

    #[test]
    fn legacy_scalar_airport_loads_as_list() {
        let store = MemorySelectionStore::default();
        store
            .write("ps.airport", json!("mia"))
            .expect("write succeeds");
        assert_eq!(Selection::load(&store).home_airports(), ["MIA"]);
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemorySelectionStore::default();
        let selection = Selection::new(
            vec!["chase-ink-cash"],
            vec!["star"],
            vec![],
            vec!["ORD", "LAX"],
        );
        selection.save(&store);
        assert_eq!(Selection::load(&store), selection);
    }
}
