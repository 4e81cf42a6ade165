//! Backup import/export commands
//!
//! The presentation layer owns the file dialogs: it passes either the file
//! path or its text to `prompts.import`, and writes `content` from
//! `prompts.export` to `fileName`.

use serde_json::{json, Value};

use super::{optional_str, required_str, Context};
use crate::{
    errors::{PromptError, Result},
    runtime,
};

/// `{path}` or `{content}` -> `{added, skipped, total}`
///
/// A `path` is read as raw bytes, so an undecodable file is reported as an
/// import format error rather than an I/O failure.
pub fn import(ctx: &Context, args: Value) -> Result<Value> {
    let content = match optional_str(&args, "path") {
        Some(path) => runtime::block_on(tokio::fs::read(path)).map_err(|e| {
            PromptError::invalid_args("prompts.import", format!("cannot read {}: {}", path, e))
        })?,
        None => required_str("prompts.import", &args, "content")?
            .as_bytes()
            .to_vec(),
    };
    let report = runtime::block_on(ctx.library.import(&content))?;
    Ok(json!(report))
}

/// `{}` -> `{fileName, content, count}`
pub fn export(ctx: &Context, _args: Value) -> Result<Value> {
    let bundle = runtime::block_on(ctx.library.export())?;
    Ok(json!(bundle))
}
