//! Prompt record and save-path input types

use serde::{Deserialize, Serialize};

/// Category assigned to prompts that have none
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A saved text snippet
///
/// Serialized with camelCase keys; `category` and `createdAt` are omitted
/// when absent so exported files round-trip field for field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id:         String,
    pub title:      String,
    #[serde(default)]
    pub tags:       Vec<String>,
    pub text:       String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category:   Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Prompt {
    /// The prompt's category, or the default when unset or empty
    pub fn category_or_default(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_CATEGORY,
        }
    }

    /// True when the category field needs a backfill
    pub fn lacks_category(&self) -> bool {
        self.category.as_deref().map_or(true, str::is_empty)
    }
}

/// Which category a saved prompt goes into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChoice {
    /// A name picked from the registry (empty means the default)
    Existing(String),
    /// The "add new" option; the name must not be blank
    New(String),
}

impl Default for CategoryChoice {
    fn default() -> Self {
        CategoryChoice::Existing(DEFAULT_CATEGORY.to_string())
    }
}

/// User input for creating or editing a prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDraft {
    pub title:    String,
    pub text:     String,
    pub tags:     Vec<String>,
    pub category: CategoryChoice,
}

impl PromptDraft {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_category(mut self, category: CategoryChoice) -> Self {
        self.category = category;
        self
    }
}

/// Split a comma-separated tag field into trimmed, non-empty tags
pub fn parse_tags(input: &str) -> Vec<String> {
    clean_tags(input.split(','))
}

/// Trim tags and drop the empty ones, keeping order
pub fn clean_tags<I, T>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
