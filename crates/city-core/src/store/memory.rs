use std::collections::HashMap;

use super::KeyValueStore;
use crate::errors::StoreError;

/// Store en memoria. Vive lo que vive el proceso, por eso sirve como
/// almacenamiento de sesión (relay) y como backend durable en tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore { pub inner: HashMap<String, String> }

impl InMemoryKeyValueStore {
    pub fn new() -> Self { Self::default() }
    pub fn contains_key(&self, key: &str) -> bool { self.inner.contains_key(key) }
    pub fn len(&self) -> usize { self.inner.len() }
    pub fn is_empty(&self) -> bool { self.inner.is_empty() }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> { Ok(self.inner.get(key).cloned()) }
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.inner.insert(key.to_string(), value);
        Ok(())
    }
    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_and_remove_is_idempotent() {
        let mut store = InMemoryKeyValueStore::new();
        store.set("k", "a".into()).unwrap();
        store.set("k", "b".into()).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("b"));
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn borrowed_store_writes_through() {
        let mut store = InMemoryKeyValueStore::new();
        {
            let mut lent: &mut InMemoryKeyValueStore = &mut store;
            KeyValueStore::set(&mut lent, "k", "v".into()).unwrap();
        }
        assert!(store.contains_key("k"));
    }
}
