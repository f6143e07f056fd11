mod file;
mod memory;

pub use file::{FileStore, atomic_write};
pub use memory::MemoryStore;

use crate::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Job collection
pub const PROJECTS_KEY: &str = "projects";
/// In-progress registration form
pub const DRAFT_KEY: &str = "projectFormData";
/// Staff roster
pub const STAFF_KEY: &str = "staff";

/// String-valued persistence, one JSON document per key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Load a single value; malformed JSON is logged and treated as absent.
pub fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            tracing::warn!(key, error = %err, "ignoring malformed persisted value");
            Ok(None)
        }
    }
}

/// Load an array; `None` when the key was never written.
///
/// Malformed JSON yields an empty collection. Elements that fail to decode
/// are skipped one by one so the rest of the collection survives.
pub fn load_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<Vec<T>>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    let items = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            tracing::warn!(key, "persisted collection is not an array, treating as empty");
            return Ok(Some(Vec::new()));
        }
        Err(err) => {
            tracing::warn!(key, error = %err, "malformed persisted collection, treating as empty");
            return Ok(Some(Vec::new()));
        }
    };

    let records = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(key, index, error = %err, "skipping malformed record");
                None
            }
        })
        .collect();

    Ok(Some(records))
}

pub fn save<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
