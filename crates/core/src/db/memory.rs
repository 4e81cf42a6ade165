//! In-memory key-value store
//!
//! Stand-in for the SQLite store in tests and short-lived sessions. An
//! optional byte quota mimics a host store running out of space.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{KvStore, StoreKey};
use crate::errors::{PromptError, Result};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries:     RwLock<HashMap<StoreKey, String>>,
    quota:       Option<usize>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes bringing the total size above `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail, as if the host store went away
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(PromptError::StoreError("Store unavailable".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn read(&self, key: StoreKey) -> Result<Option<String>> {
        self.check_available()?;
        Ok(self.entries.read().await.get(&key).cloned())
    }

    async fn write(&self, key: StoreKey, value: String) -> Result<()> {
        self.check_available()?;
        let mut entries = self.entries.write().await;

        if let Some(quota) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| **k != key)
                .map(|(_, v)| v.len())
                .sum();
            if others + value.len() > quota {
                return Err(PromptError::StoreError(format!(
                    "Quota exceeded writing '{}' ({} bytes, quota {})",
                    key,
                    others + value.len(),
                    quota
                )));
            }
        }

        entries.insert(key, value);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.check_available()?;
        self.entries.write().await.clear();
        Ok(())
    }
}
