//! Plain-text rendering of command responses

use serde_json::Value;

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

fn prompt_line(prompt: &Value) -> String {
    let tags: Vec<&str> = prompt
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| tags.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    let mut line = format!(
        "{}  {}  [{}]",
        str_field(prompt, "id"),
        str_field(prompt, "title"),
        str_field(prompt, "category")
    );
    if !tags.is_empty() {
        line.push_str(&format!("  #{}", tags.join(" #")));
    }
    line
}

fn prompt_detail(prompt: &Value) -> String {
    format!(
        "{}\n\n{}\n",
        prompt_line(prompt),
        str_field(prompt, "text")
    )
}

/// Human-readable text for a successful response of `command`
pub fn render(command: &str, response: &Value) -> String {
    match command {
        "prompts.list" => {
            let mut out: Vec<String> = response
                .get("prompts")
                .and_then(Value::as_array)
                .map(|prompts| prompts.iter().map(prompt_line).collect())
                .unwrap_or_default();
            out.push(format!(
                "{} of {} prompts",
                response["shown"], response["total"]
            ));
            out.join("\n")
        },
        "prompts.get" => prompt_detail(response),
        "prompts.create" => format!("Saved {}", prompt_line(response)),
        "prompts.update" => format!("Updated {}", prompt_line(response)),
        "prompts.delete" => {
            if response["deleted"].as_bool().unwrap_or(false) {
                format!("Deleted {}", str_field(response, "id"))
            } else {
                format!("No prompt with id {}", str_field(response, "id"))
            }
        },
        "prompts.clear" => "Library cleared".to_string(),
        "prompts.copy" => format!("Copied \"{}\" to the clipboard", str_field(response, "title")),
        "prompts.import" => format!(
            "Imported {} prompts ({} already present), {} total",
            response["added"], response["skipped"], response["total"]
        ),
        "prompts.stats" => {
            let mut out = vec![format!(
                "{} prompts in {} categories",
                response["total"], response["categories"]
            )];
            if let Some(rows) = response.get("perCategory").and_then(Value::as_array) {
                out.extend(
                    rows.iter()
                        .map(|row| format!("  {:<24} {}", str_field(row, "name"), row["count"])),
                );
            }
            out.join("\n")
        },
        "categories.list" | "categories.replace" => response
            .get("categories")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default(),
        "categories.ensure" => format!("Category {}", str_field(response, "name")),
        _ => response.to_string(),
    }
}
