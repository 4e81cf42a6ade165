//! Prompt library service
//!
//! Each public method is one user action. Actions read the whole prompt
//! collection, change it in memory, run the size guard, and write it back
//! once. Nothing is written when validation or the size guard fails.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

use crate::categories::{self, CategoryRegistry};
use crate::clipboard::Clipboard;
use crate::db::{self, KvStore, StoreKey};
use crate::errors::{PromptError, Result};
use crate::filter::filter;
use crate::id::new_id;
use crate::merge::{merge, MergeReport};
use crate::normalize::normalize;
use crate::prompt::{clean_tags, CategoryChoice, Prompt, PromptDraft};
use crate::size_guard::SizeGuard;
use crate::transfer;

/// Result of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub added:   usize,
    pub skipped: usize,
    /// Prompts in the library after the import
    pub total:   usize,
}

/// A rendered backup file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub file_name: String,
    pub content:   String,
    pub count:     usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name:  String,
    pub count: usize,
}

/// Counts for the library overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    pub total:        usize,
    pub categories:   usize,
    pub per_category: Vec<CategoryCount>,
}

/// Draft fields after validation
struct ValidDraft {
    title:    String,
    text:     String,
    tags:     Vec<String>,
    category: String,
}

fn validate(draft: PromptDraft) -> Result<ValidDraft> {
    let title = draft.title.trim().to_string();
    if title.is_empty() {
        return Err(PromptError::ValidationError("Title is required".into()));
    }
    if draft.text.trim().is_empty() {
        return Err(PromptError::ValidationError("Prompt text is required".into()));
    }

    let category = match draft.category {
        CategoryChoice::Existing(name) => categories::normalize_name(&name),
        CategoryChoice::New(name) => {
            if name.trim().is_empty() {
                return Err(PromptError::ValidationError(
                    "New category name cannot be empty".into(),
                ));
            }
            categories::normalize_name(&name)
        },
    };

    Ok(ValidDraft {
        title,
        text: draft.text,
        tags: clean_tags(draft.tags),
        category,
    })
}

/// Append a freshly created prompt; its id must not be taken
fn append_new(existing: Vec<Prompt>, prompt: Prompt) -> Result<Vec<Prompt>> {
    let id = prompt.id.clone();
    let (merged, report) = merge(existing, vec![prompt]);
    if report.skipped != 0 {
        return Err(PromptError::StoreError(format!(
            "Generated id {} is already in use",
            id
        )));
    }
    Ok(merged)
}

/// Prompt store plus category registry over one key-value store
pub struct PromptLibrary<S: KvStore + ?Sized> {
    store:      Arc<S>,
    categories: CategoryRegistry<S>,
    guard:      SizeGuard,
}

impl<S: KvStore + ?Sized> PromptLibrary<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            categories: CategoryRegistry::new(Arc::clone(&store)),
            store,
            guard: SizeGuard::default(),
        }
    }

    pub fn with_size_guard(mut self, guard: SizeGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn categories(&self) -> &CategoryRegistry<S> {
        &self.categories
    }

    async fn write_prompts(&self, prompts: &[Prompt]) -> Result<()> {
        self.guard.check(prompts)?;
        db::persist(&*self.store, StoreKey::Prompts, prompts).await
    }

    /// Stored prompts with categories backfilled in memory only
    ///
    /// Mutating actions use this so the backfill rides along with their
    /// single guarded write.
    async fn load_normalized(&self) -> Result<(Vec<Prompt>, bool)> {
        let stored: Vec<Prompt> = db::load(&*self.store, StoreKey::Prompts).await?;
        Ok(normalize(stored))
    }

    /// All prompts, with missing categories backfilled and persisted
    pub async fn load(&self) -> Result<Vec<Prompt>> {
        let (prompts, changed) = self.load_normalized().await?;
        if changed {
            info!(count = prompts.len(), "backfilled missing prompt categories");
            db::persist(&*self.store, StoreKey::Prompts, &prompts).await?;
        }
        Ok(prompts)
    }

    /// Prompts matching the search term and category (empty = any)
    pub async fn search(&self, term: &str, category: &str) -> Result<Vec<Prompt>> {
        let prompts = self.load().await?;
        Ok(filter(&prompts, term, category))
    }

    pub async fn get(&self, id: &str) -> Result<Prompt> {
        self.load()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PromptError::NotFound(id.to_string()))
    }

    /// Validate and store a new prompt
    pub async fn save(&self, draft: PromptDraft) -> Result<Prompt> {
        let draft = validate(draft)?;
        let (existing, _) = self.load_normalized().await?;

        let prompt = Prompt {
            id:         new_id(),
            title:      draft.title,
            tags:       draft.tags,
            text:       draft.text,
            category:   Some(draft.category),
            created_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        };

        let merged = append_new(existing, prompt.clone())?;
        self.write_prompts(&merged).await?;
        self.categories.ensure(prompt.category_or_default()).await?;

        info!(id = %prompt.id, category = prompt.category_or_default(), "saved prompt");
        Ok(prompt)
    }

    /// Replace the editable fields of an existing prompt
    ///
    /// `id` and `createdAt` are kept.
    pub async fn update(&self, id: &str, draft: PromptDraft) -> Result<Prompt> {
        let draft = validate(draft)?;
        let (mut prompts, _) = self.load_normalized().await?;

        let prompt = prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PromptError::NotFound(id.to_string()))?;
        prompt.title = draft.title;
        prompt.text = draft.text;
        prompt.tags = draft.tags;
        prompt.category = Some(draft.category);
        let updated = prompt.clone();

        self.write_prompts(&prompts).await?;
        self.categories.ensure(updated.category_or_default()).await?;

        info!(id = %updated.id, "updated prompt");
        Ok(updated)
    }

    /// Remove one prompt; false when the id was not present
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let (mut prompts, _) = self.load_normalized().await?;
        let before = prompts.len();
        prompts.retain(|p| p.id != id);

        if prompts.len() == before {
            return Ok(false);
        }
        db::persist(&*self.store, StoreKey::Prompts, &prompts).await?;
        info!(%id, "deleted prompt");
        Ok(true)
    }

    /// Delete every prompt and reset the category registry
    pub async fn clear(&self) -> Result<()> {
        self.store.clear().await?;
        info!("cleared prompt library");
        Ok(())
    }

    /// Put a prompt's text on the clipboard
    pub async fn copy<C>(&self, id: &str, clipboard: &C) -> Result<Prompt>
    where
        C: Clipboard + ?Sized,
    {
        let prompt = self.get(id).await?;
        clipboard.write_text(&prompt.text).await?;
        Ok(prompt)
    }

    /// Merge a backup file into the library; existing ids win
    pub async fn import(&self, content: &[u8]) -> Result<ImportReport> {
        let incoming: Vec<Prompt> = transfer::parse_import(content)?
            .into_iter()
            .map(|mut prompt| {
                if let Some(name) = prompt.category.as_mut() {
                    *name = categories::normalize_name(name);
                }
                prompt
            })
            .collect();
        let (existing, _) = self.load_normalized().await?;

        let (merged, MergeReport { added, skipped }) = merge(existing, incoming);
        let (merged, _) = normalize(merged);

        self.write_prompts(&merged).await?;
        self.categories
            .ensure_all(merged.iter().map(Prompt::category_or_default))
            .await?;

        info!(added, skipped, total = merged.len(), "imported prompts");
        Ok(ImportReport {
            added,
            skipped,
            total: merged.len(),
        })
    }

    /// Render the whole library as a backup file
    pub async fn export(&self) -> Result<ExportBundle> {
        let prompts = self.load().await?;
        Ok(ExportBundle {
            file_name: transfer::export_file_name(Utc::now()),
            content:   transfer::export_payload(&prompts)?,
            count:     prompts.len(),
        })
    }

    /// Totals per category, in registry order
    pub async fn stats(&self) -> Result<LibraryStats> {
        let prompts = self.load().await?;
        let mut names = self.categories.list().await?;
        for prompt in &prompts {
            let name = prompt.category_or_default();
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }

        let per_category: Vec<CategoryCount> = names
            .into_iter()
            .map(|name| {
                let count = prompts
                    .iter()
                    .filter(|p| p.category_or_default() == name)
                    .count();
                CategoryCount { name, count }
            })
            .collect();

        Ok(LibraryStats {
            total: prompts.len(),
            categories: per_category.len(),
            per_category,
        })
    }
}
