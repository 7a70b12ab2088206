use async_trait::async_trait;

use crate::error::StoreError;

/// Point get/set of small string markers by fixed key.
///
/// Reads and writes are individually durable but the read-modify-write
/// sequences built on top are not atomic; overlapping invocations can race.
#[async_trait]
pub trait MarkerStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
