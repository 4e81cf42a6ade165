//! Command registry and dispatch system
//!
//! The presentation layer drives the library through named commands
//! ("category.action", e.g. "prompts.list", "categories.ensure") that take
//! and return JSON. Handlers are synchronous and block on the shared
//! runtime for store access.
//!
//! ## Adding a new command
//!
//! 1. Create handler function: `pub fn my_command(ctx: &Context, args: Value) -> Result<Value>`
//! 2. Register in `REGISTRY`: `("category.action", my_command as CommandHandler)`
//! 3. Add tests for the command

use std::{collections::HashMap, sync::Arc};

use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::Config;
use crate::db::{KvStore, SqliteStore};
use crate::errors::{PromptError, Result};
use crate::library::PromptLibrary;
use crate::runtime;
use crate::size_guard::SizeGuard;

pub mod categories;
pub mod prompts;
pub mod transfer;

/// Everything a handler needs; passed explicitly to every command
pub struct Context {
    pub library:   PromptLibrary<dyn KvStore>,
    pub clipboard: Arc<dyn Clipboard>,
}

impl Context {
    pub fn new(store: Arc<dyn KvStore>, clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            library: PromptLibrary::new(store),
            clipboard,
        }
    }

    pub fn with_size_guard(mut self, guard: SizeGuard) -> Self {
        self.library = self.library.with_size_guard(guard);
        self
    }

    /// Open the SQLite store named by `config` with the system clipboard
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = runtime::block_on(SqliteStore::open(&config.db_path))?;
        Ok(Self::new(Arc::new(store), Arc::new(SystemClipboard))
            .with_size_guard(SizeGuard::new(config.max_write_bytes)))
    }
}

/// Type alias for command handler functions
pub type CommandHandler = fn(&Context, Value) -> Result<Value>;

/// Static command registry
static REGISTRY: Lazy<HashMap<&'static str, CommandHandler>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert("prompts.list", prompts::list as CommandHandler);
    map.insert("prompts.get", prompts::get as CommandHandler);
    map.insert("prompts.create", prompts::create as CommandHandler);
    map.insert("prompts.update", prompts::update as CommandHandler);
    map.insert("prompts.delete", prompts::delete as CommandHandler);
    map.insert("prompts.clear", prompts::clear as CommandHandler);
    map.insert("prompts.copy", prompts::copy as CommandHandler);
    map.insert("prompts.stats", prompts::stats as CommandHandler);

    map.insert("prompts.import", transfer::import as CommandHandler);
    map.insert("prompts.export", transfer::export as CommandHandler);

    map.insert("categories.list", categories::list as CommandHandler);
    map.insert("categories.replace", categories::replace as CommandHandler);
    map.insert("categories.ensure", categories::ensure as CommandHandler);

    map
});

/// Dispatch a command by name
///
/// # Returns
/// Command result as JSON Value, or error if the command is unknown or fails
pub fn dispatch(ctx: &Context, command: &str, args: Value) -> Result<Value> {
    match REGISTRY.get(command) {
        Some(handler) => {
            debug!(command, "dispatching command");
            handler(ctx, args)
        },
        None => Err(PromptError::CommandNotFound(command.to_string())),
    }
}

/// Dispatch and convert any failure into an error object
///
/// The returned object never represents a panic or an unhandled error:
/// `{"error": true, "message": ..., "category": ...}` on failure.
pub fn call(ctx: &Context, command: &str, args: Value) -> Value {
    match dispatch(ctx, command, args) {
        Ok(value) => value,
        Err(err) => {
            warn!(command, category = err.category(), error = %err, "command failed");
            error_object(&err)
        },
    }
}

/// Structured error for the presentation layer
pub fn error_object(err: &PromptError) -> Value {
    json!({
        "error": true,
        "message": err.user_message(),
        "category": err.category(),
    })
}

/// True when `value` is an object produced by `error_object`
pub fn is_error(value: &Value) -> bool {
    value.get("error").and_then(Value::as_bool).unwrap_or(false)
}

/// List all available commands, sorted
pub fn list_commands() -> Vec<String> {
    let mut commands: Vec<String> = REGISTRY.keys().map(|&k| k.to_string()).collect();
    commands.sort();
    commands
}

// ============================================================================
// Argument helpers
// ============================================================================

pub(crate) fn required_str<'a>(command: &str, args: &'a Value, key: &str) -> Result<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| PromptError::invalid_args(command, format!("missing '{}'", key)))
}

pub(crate) fn optional_str<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str)
}

/// String list argument; a single string is split on commas
pub(crate) fn string_list(command: &str, args: &Value, key: &str) -> Result<Vec<String>> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(s)) => Ok(crate::prompt::parse_tags(s)),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| {
                v.as_str().map(String::from).ok_or_else(|| {
                    PromptError::invalid_args(command, format!("'{}' must contain strings", key))
                })
            })
            .collect(),
        Some(_) => Err(PromptError::invalid_args(
            command,
            format!("'{}' must be a list of strings", key),
        )),
    }
}
