//! promptbox CLI - local prompt library
//!
//! Commands:
//! - `promptbox list [-s term] [-c category]`: List and filter prompts
//! - `promptbox show <id>`: Show one prompt
//! - `promptbox add --title T --text X [--tags a,b] [--category C | --new-category N]`
//! - `promptbox edit <id> ...`: Edit a prompt (same flags as add)
//! - `promptbox delete <id> [--yes]`: Delete a prompt
//! - `promptbox clear [--yes]`: Delete everything
//! - `promptbox copy <id>`: Copy prompt text to the clipboard
//! - `promptbox export [--dir D]`: Write prompts-backup-<millis>.json
//! - `promptbox import <file>`: Merge a backup file
//! - `promptbox categories [list | add <name> | set <names..>]`
//! - `promptbox stats`: Totals per category
//!
//! Environment variables:
//! - PROMPTBOX_DB_PATH: SQLite database file
//! - PROMPTBOX_MAX_WRITE_BYTES: Size ceiling for a single write
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

mod cli;
mod render;

use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use anyhow::Context as _;
use clap::Parser;
use promptbox_core::{
    commands::{self, Context},
    config::Config,
};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn read_text(text: &str) -> anyhow::Result<String> {
    if text != "-" {
        return Ok(text.to_string());
    }
    let mut body = String::new();
    io::stdin()
        .read_to_string(&mut body)
        .context("Failed to read prompt text from stdin")?;
    Ok(body)
}

/// Destructive commands need an explicit yes
fn confirmed(command: &Command) -> anyhow::Result<bool> {
    match command {
        Command::Delete { id, yes } => Ok(*yes || confirm(&format!("Delete prompt {}?", id))?),
        Command::Clear { yes } => {
            Ok(*yes || confirm("Delete ALL prompts and categories? This cannot be undone.")?)
        },
        _ => Ok(true),
    }
}

fn write_export(dir: &Path, response: &Value) -> anyhow::Result<String> {
    let file_name = response["fileName"].as_str().unwrap_or("prompts-backup.json");
    let content = response["content"].as_str().unwrap_or("[]");
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(file_name);
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(format!(
        "Exported {} prompts to {}",
        response["count"],
        path.display()
    ))
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    if let Command::Commands = cli.command {
        for name in commands::list_commands() {
            println!("{}", name);
        }
        return Ok(0);
    }

    let mut config = Config::from_env()?;
    if let Some(db) = cli.db.clone() {
        config.db_path = db;
    }
    tracing::debug!(db = %config.db_path.display(), "using database");

    let Some(request) = cli::to_request(&cli.command, read_text)? else {
        return Ok(0);
    };
    if !confirmed(&cli.command)? {
        println!("Cancelled");
        return Ok(0);
    }

    let ctx = Context::from_config(&config)?;
    let response = commands::call(&ctx, request.name, request.args);

    if commands::is_error(&response) {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            eprintln!("Error: {}", response["message"].as_str().unwrap_or("unknown error"));
        }
        return Ok(1);
    }

    if let Command::Export { dir } = &cli.command {
        let summary = write_export(dir, &response)?;
        if !cli.json {
            println!("{}", summary);
            return Ok(0);
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", render::render(request.name, &response));
    }
    Ok(0)
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("promptbox=debug,promptbox_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        },
    };
    std::process::exit(code);
}
