//! The key-value store trait and the in-memory implementation.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A string-keyed store of JSON documents.
///
/// Mirrors the surface the storefront needs from its durable store: get,
/// set, delete, existence and key listing, plus typed JSON accessors for
/// anything implementing `Serialize` / `DeserializeOwned`.
pub trait KvStore {
    /// Get the raw JSON document stored under `key`, if any.
    fn get_value(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Store a JSON document under `key`, replacing any previous value.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Delete the value under `key`. Deleting a missing key is a no-op.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;

    /// All keys currently present, in unspecified order.
    fn keys(&self) -> Result<Vec<String>, StoreError>;

    /// Check whether `key` is present.
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get_value(key)?.is_some())
    }

    /// Get and deserialize the value under `key`.
    ///
    /// Returns `None` if the key is absent. A present but malformed value
    /// is an error; callers that want silent recovery handle it themselves.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get_value(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store `value` under `key`.
    fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(value)?;
        self.set_value(key, value)
    }
}

/// An ephemeral in-memory store.
///
/// Nothing survives the process; used in tests and anywhere persistence
/// is not wanted.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get_value(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_value(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn set_and_get_json_round_trip() {
        let mut store = MemoryStore::new();
        let sample = Sample {
            name: "cart".to_string(),
            count: 3,
        };

        store.set_json("sample", &sample).unwrap();
        let loaded: Option<Sample> = store.get_json("sample").unwrap();
        assert_eq!(loaded, Some(sample));
    }

    #[test]
    fn missing_key_is_none() {
        let store = MemoryStore::new();
        let loaded: Option<Sample> = store.get_json("absent").unwrap();
        assert!(loaded.is_none());
        assert!(!store.exists("absent").unwrap());
    }

    #[test]
    fn malformed_value_is_an_error() {
        let mut store = MemoryStore::new();
        store
            .set_value("sample", serde_json::json!("not an object"))
            .unwrap();

        let loaded: Result<Option<Sample>, _> = store.get_json("sample");
        assert!(loaded.is_err());
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = MemoryStore::new();
        store.set_json("key", &1u32).unwrap();
        store.delete("key").unwrap();
        store.delete("key").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn keys_lists_all_entries() {
        let mut store = MemoryStore::new();
        store.set_json("a", &1u32).unwrap();
        store.set_json("b", &2u32).unwrap();
        assert_eq!(store.keys().unwrap(), vec!["a", "b"]);
    }
}
