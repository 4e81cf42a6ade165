//! Export and import of prompt backups
//!
//! The interchange format is a UTF-8 JSON array of prompt objects. Imports
//! are checked for shape only: every element must look like a prompt or the
//! whole file is rejected.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::errors::{PromptError, Result};
use crate::prompt::Prompt;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

fn is_string_or_absent(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).map_or(true, Value::is_string)
}

/// Structural check for one imported element
///
/// `id` string or number, `title`/`text` strings, `tags` an array of
/// strings, `category`/`createdAt` strings when present. Empty strings pass.
pub fn is_prompt_like(candidate: &Value) -> bool {
    let Some(obj) = candidate.as_object() else {
        return false;
    };

    matches!(obj.get("id"), Some(Value::String(_) | Value::Number(_)))
        && obj.get("title").is_some_and(Value::is_string)
        && obj.get("text").is_some_and(Value::is_string)
        && obj
            .get("tags")
            .and_then(Value::as_array)
            .is_some_and(|tags| tags.iter().all(Value::is_string))
        && is_string_or_absent(obj, "category")
        && is_string_or_absent(obj, "createdAt")
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(String::from)
}

/// Build a prompt from an element that passed `is_prompt_like`
///
/// Numeric ids become their decimal string so every stored id is a string.
fn to_prompt(obj: &Map<String, Value>) -> Prompt {
    let id = match obj.get("id") {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    };
    let tags = obj
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Prompt {
        id,
        title: string_field(obj, "title").unwrap_or_default(),
        tags,
        text: string_field(obj, "text").unwrap_or_default(),
        category: string_field(obj, "category"),
        created_at: string_field(obj, "createdAt"),
    }
}

/// Parse an import file, rejecting the whole batch on any malformed element
pub fn parse_import(content: &[u8]) -> Result<Vec<Prompt>> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    let value: Value = serde_json::from_slice(content)
        .map_err(|e| PromptError::ImportFormatError(format!("not valid JSON ({})", e)))?;

    let items = value.as_array().ok_or_else(|| {
        PromptError::ImportFormatError("expected a JSON array of prompts".to_string())
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item.as_object() {
            Some(obj) if is_prompt_like(item) => Ok(to_prompt(obj)),
            _ => Err(PromptError::ImportFormatError(format!(
                "item {} is not a valid prompt",
                index
            ))),
        })
        .collect()
}

/// Pretty-printed JSON array for a backup file
pub fn export_payload(prompts: &[Prompt]) -> Result<String> {
    Ok(serde_json::to_string_pretty(prompts)?)
}

/// `prompts-backup-<epoch-millis>.json`
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("prompts-backup-{}.json", now.timestamp_millis())
}
