//! Shared variable store for passing values between unconnected nodes
//!
//! A Set node writes a named value here; a Get node somewhere else in the
//! graph reads it back. The store is the only channel between the two:
//! the host's graph has no edge connecting them.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use log::debug;
use once_cell::sync::Lazy;

use crate::nodes::detect::detect_data_type;
use crate::nodes::factory::DataType;
use crate::nodes::interface::NodeData;

/// One stored variable: payload, resolved type tag, write timestamp.
///
/// The timestamp is informational only.
#[derive(Debug, Clone)]
pub struct Entry {
    pub value: NodeData,
    pub data_type: DataType,
    pub written_at: DateTime<Utc>,
}

/// Process-wide store instance, constructed on first access.
static VARIABLE_STORE: Lazy<VariableStore> = Lazy::new(VariableStore::new);

/// The shared store every collaborator in the process writes and reads.
///
/// Prefer passing a `&VariableStore` where practical; this accessor exists
/// for the node entry points the host dispatches to without context.
pub fn variable_store() -> &'static VariableStore {
    &VARIABLE_STORE
}

/// Thread-safe named storage for arbitrary-typed values.
///
/// One lock guards the whole map, and every operation locks, works, and
/// unlocks, so each call is atomic with respect to all others. Nothing
/// blocking happens under the lock.
#[derive(Debug, Default)]
pub struct VariableStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl VariableStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        // Entries are inserted whole, so a panicked writer cannot leave a
        // half-written map; recover the guard instead of failing.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `value` under `name`, replacing any previous entry.
    ///
    /// Without an explicit tag (or with the wildcard) the tag is inferred
    /// from the payload. Any payload is accepted, including the null
    /// value. Returns the resolved tag.
    pub fn set(
        &self,
        name: impl Into<String>,
        value: NodeData,
        declared: Option<DataType>,
    ) -> DataType {
        let name = name.into();
        let data_type = match declared {
            Some(tag) if tag != DataType::Any => tag,
            _ => detect_data_type(&value),
        };
        let entry = Entry {
            value,
            data_type,
            written_at: Utc::now(),
        };
        self.lock().insert(name.clone(), entry);
        debug!("stored '{}' ({})", name, data_type);
        data_type
    }

    /// The stored payload, or `None` if the name was never written.
    ///
    /// A stored null comes back as `Some(NodeData::None)`; absence and
    /// stored-null never collapse into each other.
    pub fn get(&self, name: &str) -> Option<NodeData> {
        self.lock().get(name).map(|entry| entry.value.clone())
    }

    /// The stored payload and its tag, or `None` if absent.
    pub fn get_with_type(&self, name: &str) -> Option<(NodeData, DataType)> {
        self.lock()
            .get(name)
            .map(|entry| (entry.value.clone(), entry.data_type))
    }

    /// The tag for `name`; the wildcard tag if absent.
    pub fn get_type(&self, name: &str) -> DataType {
        self.lock()
            .get(name)
            .map(|entry| entry.data_type)
            .unwrap_or(DataType::Any)
    }

    /// Full entry including the write timestamp, or `None` if absent.
    pub fn entry(&self, name: &str) -> Option<Entry> {
        self.lock().get(name).cloned()
    }

    /// Membership test; mutates nothing.
    pub fn exists(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    /// Snapshot of every stored name and its tag.
    pub fn list_all(&self) -> BTreeMap<String, DataType> {
        self.lock()
            .iter()
            .map(|(name, entry)| (name.clone(), entry.data_type))
            .collect()
    }

    /// Snapshot of stored names, sorted for stable diagnostics.
    pub fn list_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }

    /// Delete `name`; reports whether anything was removed. Removing an
    /// absent name is a no-op.
    pub fn remove(&self, name: &str) -> bool {
        let removed = self.lock().remove(name).is_some();
        if removed {
            debug!("removed '{}'", name);
        }
        removed
    }

    /// Delete every entry; the store stays usable.
    pub fn clear(&self) {
        let mut entries = self.lock();
        let count = entries.len();
        entries.clear();
        debug!("cleared {} entries", count);
    }

    /// Number of stored variables
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
