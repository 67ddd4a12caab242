//! Key-Value Storage
//!
//! JSON payloads in `localStorage`, behind a trait so the demo auth flow can
//! run against an in-memory map in tests.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ShopError, ShopResult};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> ShopResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> ShopResult<()>;
    fn remove(&self, key: &str) -> ShopResult<()>;

    fn get_json<T: DeserializeOwned>(&self, key: &str) -> ShopResult<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> ShopResult<()>
    where
        Self: Sized,
    {
        self.set(key, &serde_json::to_string(value)?)
    }
}

/// `window.localStorage`
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> ShopResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| ShopError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> ShopResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| ShopError::Storage(format!("read {} failed", key)))
    }

    fn set(&self, key: &str, value: &str) -> ShopResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| ShopError::Storage(format!("write {} failed", key)))
    }

    fn remove(&self, key: &str) -> ShopResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| ShopError::Storage(format!("remove {} failed", key)))
    }
}

/// In-memory store
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> ShopResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ShopResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ShopResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip_and_remove() {
        let store = MemoryStorage::default();
        store.set_json("k", &vec![1u32, 2, 3]).unwrap();
        assert_eq!(store.get_json::<Vec<u32>>("k").unwrap(), Some(vec![1, 2, 3]));
        store.remove("k").unwrap();
        assert_eq!(store.get_json::<Vec<u32>>("k").unwrap(), None);
    }

    #[test]
    fn test_corrupt_payload_is_storage_error() {
        let store = MemoryStorage::default();
        store.set("k", "not json").unwrap();
        assert!(matches!(store.get_json::<Vec<u32>>("k"), Err(ShopError::Storage(_))));
    }
}
