use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::StoreError;
use crate::store::MarkerStore;

/// In-memory marker store for tests and ephemeral runs.
#[derive(Default)]
pub struct InMemoryMarkerStore {
    markers: RwLock<HashMap<String, String>>,
}

impl InMemoryMarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of markers currently held. Tests use this to assert that an
    /// invocation performed no writes.
    pub fn len(&self) -> usize {
        self.markers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.read().is_empty()
    }
}

#[async_trait]
impl MarkerStore for InMemoryMarkerStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.markers.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _ = self.markers.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_contract_as_sqlite() {
        let store = InMemoryMarkerStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("k").await.unwrap(), None);

        store.set("k", "v1").await.unwrap();
        store.set("k", "v2").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);
    }
}
