//! Clipboard collaborator

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::errors::{PromptError, Result};

/// Destination for "copy prompt text"
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Desktop clipboard via arboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| PromptError::ClipboardError(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| PromptError::ClipboardError(e.to_string()))
        })
        .await
        .map_err(|e| PromptError::ClipboardError(format!("Clipboard task failed: {}", e)))?
    }
}
