use serde_json::{json, Value};

use super::{required_str, string_list, Context};
use crate::{errors::Result, runtime};

pub fn list(ctx: &Context, _args: Value) -> Result<Value> {
    let categories = runtime::block_on(ctx.library.categories().list())?;
    Ok(json!({ "categories": categories }))
}

/// `{categories: [..]}` -> canonical `{categories}`
pub fn replace(ctx: &Context, args: Value) -> Result<Value> {
    let candidates = string_list("categories.replace", &args, "categories")?;
    let categories = runtime::block_on(ctx.library.categories().replace(candidates))?;
    Ok(json!({ "categories": categories }))
}

/// `{name}` -> `{name}` (normalized)
pub fn ensure(ctx: &Context, args: Value) -> Result<Value> {
    let name = required_str("categories.ensure", &args, "name")?;
    let name = runtime::block_on(ctx.library.categories().ensure(name))?;
    Ok(json!({ "name": name }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::context;
    use crate::prompt::DEFAULT_CATEGORY;

    #[test]
    fn test_list_default() {
        let ctx = context();
        let value = list(&ctx, json!({})).unwrap();
        assert_eq!(value["categories"], json!([DEFAULT_CATEGORY]));
    }

    #[test]
    fn test_replace_and_ensure() {
        let ctx = context();
        let value = replace(&ctx, json!({"categories": [" Work ", "", "Work"]})).unwrap();
        assert_eq!(value["categories"], json!([DEFAULT_CATEGORY, "Work"]));

        let value = ensure(&ctx, json!({"name": "  Fun "})).unwrap();
        assert_eq!(value["name"], json!("Fun"));

        let value = ensure(&ctx, json!({"name": ""})).unwrap();
        assert_eq!(value["name"], json!(DEFAULT_CATEGORY));

        let value = list(&ctx, json!({})).unwrap();
        assert_eq!(value["categories"], json!([DEFAULT_CATEGORY, "Work", "Fun"]));
    }

    #[test]
    fn test_ensure_requires_name() {
        let ctx = context();
        assert!(ensure(&ctx, json!({})).is_err());
    }
}
