//! Command-line definitions and their mapping onto core commands

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Debug, Parser)]
#[command(name = "promptbox", version, about = "Local prompt library")]
pub struct Cli {
    /// SQLite database file (overrides PROMPTBOX_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Print raw JSON responses
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct PromptFields {
    #[arg(long)]
    pub title: String,

    /// Prompt body; `-` reads it from stdin
    #[arg(long)]
    pub text: String,

    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,

    /// Existing category (blank means Uncategorized)
    #[arg(long, conflicts_with = "new_category")]
    pub category: Option<String>,

    /// Create and use a new category
    #[arg(long)]
    pub new_category: Option<String>,
}

impl PromptFields {
    fn to_args(&self, text: String) -> Value {
        let mut args = json!({
            "title": self.title,
            "text": text,
            "tags": self.tags,
        });
        if let Some(category) = &self.category {
            args["category"] = json!(category);
        }
        if let Some(name) = &self.new_category {
            args["newCategory"] = json!(name);
        }
        args
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List prompts, optionally filtered
    List {
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(short, long, default_value = "")]
        category: String,
    },
    /// Show one prompt
    Show { id: String },
    /// Save a new prompt
    Add(PromptFields),
    /// Edit an existing prompt
    Edit {
        id: String,
        #[command(flatten)]
        fields: PromptFields,
    },
    /// Delete one prompt
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete every prompt and category
    Clear {
        #[arg(short, long)]
        yes: bool,
    },
    /// Copy a prompt's text to the clipboard
    Copy { id: String },
    /// Write a backup file
    Export {
        /// Directory to write into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Merge a backup file into the library
    Import { file: PathBuf },
    /// Manage categories
    Categories {
        #[command(subcommand)]
        action: Option<CategoryAction>,
    },
    /// Library totals
    Stats,
    /// List core command names
    Commands,
}

#[derive(Debug, Subcommand)]
pub enum CategoryAction {
    List,
    Add { name: String },
    /// Replace the category list
    Set { names: Vec<String> },
}

/// A core command name plus its JSON arguments
pub struct Request {
    pub name: &'static str,
    pub args: Value,
}

impl Request {
    fn new(name: &'static str, args: Value) -> Self {
        Self { name, args }
    }
}

/// Map a parsed subcommand to a core request
///
/// `read_text` resolves a `-` body from stdin. Import files are passed by
/// path so the core reads their raw bytes.
pub fn to_request<T>(command: &Command, read_text: T) -> anyhow::Result<Option<Request>>
where
    T: Fn(&str) -> anyhow::Result<String>,
{
    let request = match command {
        Command::List { search, category } => Request::new(
            "prompts.list",
            json!({ "search": search, "category": category }),
        ),
        Command::Show { id } => Request::new("prompts.get", json!({ "id": id })),
        Command::Add(fields) => {
            Request::new("prompts.create", fields.to_args(read_text(&fields.text)?))
        },
        Command::Edit { id, fields } => {
            let mut args = fields.to_args(read_text(&fields.text)?);
            args["id"] = json!(id);
            Request::new("prompts.update", args)
        },
        Command::Delete { id, .. } => Request::new("prompts.delete", json!({ "id": id })),
        Command::Clear { .. } => Request::new("prompts.clear", json!({})),
        Command::Copy { id } => Request::new("prompts.copy", json!({ "id": id })),
        Command::Export { .. } => Request::new("prompts.export", json!({})),
        Command::Import { file } => {
            Request::new("prompts.import", json!({ "path": file.to_string_lossy() }))
        },
        Command::Categories { action } => match action {
            None | Some(CategoryAction::List) => Request::new("categories.list", json!({})),
            Some(CategoryAction::Add { name }) => {
                Request::new("categories.ensure", json!({ "name": name }))
            },
            Some(CategoryAction::Set { names }) => {
                Request::new("categories.replace", json!({ "categories": names }))
            },
        },
        Command::Stats => Request::new("prompts.stats", json!({})),
        Command::Commands => return Ok(None),
    };
    Ok(Some(request))
}
