//! Category registry
//!
//! The persisted category list is an ordered set: trimmed, deduplicated,
//! and always containing the default category. It only ever grows.

use std::{collections::HashSet, sync::Arc};

use tracing::info;

use crate::db::{self, KvStore, StoreKey};
use crate::errors::Result;
use crate::prompt::DEFAULT_CATEGORY;

/// Trim a name; blank names become the default category
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Deduplicate keeping the first occurrence, then make sure the default is present
fn canonical<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut out: Vec<String> = names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect();
    if !seen.contains(DEFAULT_CATEGORY) {
        out.insert(0, DEFAULT_CATEGORY.to_string());
    }
    out
}

/// Category registry over a shared store
pub struct CategoryRegistry<S: KvStore + ?Sized> {
    store: Arc<S>,
}

impl<S: KvStore + ?Sized> Clone for CategoryRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KvStore + ?Sized> CategoryRegistry<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    async fn read_raw(&self) -> Result<Vec<String>> {
        db::load(&*self.store, StoreKey::Categories).await
    }

    /// Current categories; the default is injected but not persisted
    pub async fn list(&self) -> Result<Vec<String>> {
        Ok(canonical(self.read_raw().await?))
    }

    /// Replace the whole registry with the cleaned `candidates`
    pub async fn replace<I, T>(&self, candidates: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let cleaned = canonical(
            candidates
                .into_iter()
                .map(|c| c.as_ref().trim().to_string())
                .filter(|c| !c.is_empty()),
        );
        db::persist(&*self.store, StoreKey::Categories, &cleaned).await?;
        Ok(cleaned)
    }

    /// Register `name` if new and return its normalized form
    pub async fn ensure(&self, name: &str) -> Result<String> {
        let name = normalize_name(name);
        self.ensure_all([name.as_str()]).await?;
        Ok(name)
    }

    /// Register several names in one read-modify-write
    ///
    /// Writes only when a name is new or the stored list was not canonical.
    pub async fn ensure_all<I, T>(&self, names: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let stored = self.read_raw().await?;
        let mut current = canonical(stored.iter().cloned());
        let mut needs_write = current != stored;

        for name in names {
            let name = normalize_name(name.as_ref());
            if !current.contains(&name) {
                info!(category = %name, "registering new category");
                current.push(name);
                needs_write = true;
            }
        }

        if needs_write {
            db::persist(&*self.store, StoreKey::Categories, &current).await?;
        }
        Ok(current)
    }
}
