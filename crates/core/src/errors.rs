//! Error types for promptbox
//!
//! Every user action is wrapped at the command boundary, so each variant
//! carries a user-facing message and a stable category string for logs.

use thiserror::Error;

/// Result type alias for promptbox operations
pub type Result<T> = std::result::Result<T, PromptError>;

/// Main error type for promptbox
#[derive(Debug, Error)]
pub enum PromptError {
    /// Required field empty on save, or empty new-category name
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Import payload is not an array of prompt-shaped objects
    #[error("Import format error: {0}")]
    ImportFormatError(String),

    /// Serialized write would exceed the configured ceiling
    #[error("Write of {size} bytes exceeds the {limit} byte limit")]
    QuotaError { size: usize, limit: usize },

    /// Store backend failure (unavailable, quota at the store layer, join error)
    #[error("Store error: {0}")]
    StoreError(String),

    /// SQLite error
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    /// Clipboard collaborator failed
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// No prompt with the given id
    #[error("Prompt not found: {0}")]
    NotFound(String),

    /// Command not found in registry
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid command arguments
    #[error("Invalid arguments for command '{command}': {reason}")]
    InvalidArgs { command: String, reason: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic error (catch-all)
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for PromptError {
    fn from(err: anyhow::Error) -> Self {
        PromptError::Other(err.to_string())
    }
}

impl From<String> for PromptError {
    fn from(err: String) -> Self {
        PromptError::Other(err)
    }
}

impl From<&str> for PromptError {
    fn from(err: &str) -> Self {
        PromptError::Other(err.to_string())
    }
}

impl PromptError {
    /// Shorthand for an `InvalidArgs` error
    pub fn invalid_args(command: &str, reason: impl Into<String>) -> Self {
        PromptError::InvalidArgs {
            command: command.to_string(),
            reason:  reason.into(),
        }
    }

    /// Get user-friendly error message for display
    pub fn user_message(&self) -> String {
        match self {
            PromptError::ValidationError(msg) => msg.clone(),
            PromptError::ImportFormatError(msg) => {
                format!("Invalid import file: {}. Nothing was imported.", msg)
            },
            PromptError::QuotaError { size, limit } => {
                format!(
                    "Storage limit reached: the library would take {} bytes (limit {}). \
                     Nothing was saved.",
                    size, limit
                )
            },
            PromptError::StoreError(_)
            | PromptError::DatabaseError(_)
            | PromptError::SerdeError(_)
            | PromptError::IoError(_) => {
                "Could not access prompt storage. Please try again.".to_string()
            },
            PromptError::ClipboardError(_) => "Could not copy to clipboard.".to_string(),
            PromptError::CommandNotFound(cmd) => {
                format!(
                    "Command '{}' not found. Run `promptbox commands` for available commands.",
                    cmd
                )
            },
            PromptError::InvalidArgs { command, reason } => {
                format!("Invalid arguments for '{}': {}", command, reason)
            },
            _ => self.to_string(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            PromptError::ValidationError(_) => "validation",
            PromptError::ImportFormatError(_) => "import_format",
            PromptError::QuotaError { .. } => "quota",
            PromptError::StoreError(_) => "store",
            PromptError::DatabaseError(_) => "database",
            PromptError::ClipboardError(_) => "clipboard",
            PromptError::NotFound(_) => "not_found",
            PromptError::CommandNotFound(_) => "command",
            PromptError::InvalidArgs { .. } => "arguments",
            PromptError::SerdeError(_) => "serialization",
            PromptError::IoError(_) => "io",
            PromptError::ConfigError(_) => "config",
            PromptError::Other(_) => "other",
        }
    }
}
