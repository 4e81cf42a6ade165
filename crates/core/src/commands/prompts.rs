use serde_json::{json, Value};

use super::{optional_str, required_str, string_list, Context};
use crate::{
    errors::Result,
    prompt::{CategoryChoice, PromptDraft},
    runtime,
};

/// Build a draft from `title`, `text`, `tags`, `category` / `newCategory`
///
/// `newCategory` (even when empty) selects the "add new" option.
fn draft_from_args(command: &str, args: &Value) -> Result<PromptDraft> {
    let title = required_str(command, args, "title")?;
    let text = required_str(command, args, "text")?;
    let tags = string_list(command, args, "tags")?;
    let category = match optional_str(args, "newCategory") {
        Some(name) => CategoryChoice::New(name.to_string()),
        None => CategoryChoice::Existing(optional_str(args, "category").unwrap_or("").to_string()),
    };

    Ok(PromptDraft::new(title, text)
        .with_tags(tags)
        .with_category(category))
}

/// `{search?, category?}` -> `{prompts, shown, total}`
pub fn list(ctx: &Context, args: Value) -> Result<Value> {
    let search = optional_str(&args, "search").unwrap_or("");
    let category = optional_str(&args, "category").unwrap_or("");

    let (all, shown) = runtime::block_on(async {
        let all = ctx.library.load().await?;
        let shown = crate::filter::filter(&all, search, category);
        Ok::<_, crate::PromptError>((all.len(), shown))
    })?;

    Ok(json!({ "prompts": shown, "shown": shown.len(), "total": all }))
}

pub fn get(ctx: &Context, args: Value) -> Result<Value> {
    let id = required_str("prompts.get", &args, "id")?;
    let prompt = runtime::block_on(ctx.library.get(id))?;
    Ok(json!(prompt))
}

pub fn create(ctx: &Context, args: Value) -> Result<Value> {
    let draft = draft_from_args("prompts.create", &args)?;
    let prompt = runtime::block_on(ctx.library.save(draft))?;
    Ok(json!(prompt))
}

pub fn update(ctx: &Context, args: Value) -> Result<Value> {
    let id = required_str("prompts.update", &args, "id")?;
    let draft = draft_from_args("prompts.update", &args)?;
    let prompt = runtime::block_on(ctx.library.update(id, draft))?;
    Ok(json!(prompt))
}

pub fn delete(ctx: &Context, args: Value) -> Result<Value> {
    let id = required_str("prompts.delete", &args, "id")?;
    let deleted = runtime::block_on(ctx.library.delete(id))?;
    Ok(json!({ "deleted": deleted, "id": id }))
}

pub fn clear(ctx: &Context, _args: Value) -> Result<Value> {
    runtime::block_on(ctx.library.clear())?;
    Ok(json!({ "success": true }))
}

pub fn copy(ctx: &Context, args: Value) -> Result<Value> {
    let id = required_str("prompts.copy", &args, "id")?;
    let prompt = runtime::block_on(ctx.library.copy(id, &*ctx.clipboard))?;
    Ok(json!({ "copied": true, "id": prompt.id, "title": prompt.title }))
}

pub fn stats(ctx: &Context, _args: Value) -> Result<Value> {
    let stats = runtime::block_on(ctx.library.stats())?;
    Ok(json!(stats))
}
