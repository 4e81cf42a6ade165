//! Record store adapter
//!
//! The library persists two whole collections under fixed keys. Every
//! consumer reads and writes the entire collection; there are no partial
//! updates, so a single read-modify-write is the unit of consistency.

use std::fmt;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::errors::Result;

pub mod memory;
pub mod schema;
pub mod sqlite;
#[cfg(test)]
mod sqlite_test;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// The two persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Prompts,
    Categories,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Prompts => "prompts",
            StoreKey::Categories => "categories",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistent key-value store holding serialized collections
///
/// `read` returns `None` for a key that was never written. `write` either
/// replaces the whole value or fails without touching the previous one.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn read(&self, key: StoreKey) -> Result<Option<String>>;

    async fn write(&self, key: StoreKey, value: String) -> Result<()>;

    /// Remove every key
    async fn clear(&self) -> Result<()>;
}

/// Read and decode a collection, defaulting when the key is absent
pub async fn load<T, S>(store: &S, key: StoreKey) -> Result<T>
where
    T: DeserializeOwned + Default,
    S: KvStore + ?Sized,
{
    match store.read(key).await? {
        Some(raw) => {
            debug!(%key, bytes = raw.len(), "loaded collection");
            Ok(serde_json::from_str(&raw)?)
        },
        None => {
            debug!(%key, "collection absent, using default");
            Ok(T::default())
        },
    }
}

/// Encode and write a whole collection
pub async fn persist<T, S>(store: &S, key: StoreKey, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KvStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    debug!(%key, bytes = raw.len(), "persisting collection");
    store.write(key, raw).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(StoreKey::Prompts.as_str(), "prompts");
        assert_eq!(StoreKey::Categories.to_string(), "categories");
    }

    #[tokio::test]
    async fn test_load_absent_key_defaults() {
        let store = MemoryStore::new();
        let prompts: Vec<crate::Prompt> = load(&store, StoreKey::Prompts).await.unwrap();
        assert!(prompts.is_empty());
    }

    #[tokio::test]
    async fn test_persist_then_load() {
        let store = MemoryStore::new();
        let cats = vec!["Uncategorized".to_string(), "Work".to_string()];
        persist(&store, StoreKey::Categories, &cats).await.unwrap();

        let loaded: Vec<String> = load(&store, StoreKey::Categories).await.unwrap();
        assert_eq!(loaded, cats);
    }

    #[tokio::test]
    async fn test_load_corrupt_value_is_error() {
        let store = MemoryStore::new();
        store
            .write(StoreKey::Prompts, "not json".to_string())
            .await
            .unwrap();

        let result: Result<Vec<crate::Prompt>> = load(&store, StoreKey::Prompts).await;
        assert!(matches!(result, Err(crate::PromptError::SerdeError(_))));
    }
}
