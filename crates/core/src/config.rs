//! Runtime configuration
//!
//! Read from the process environment after loading an optional `.env`:
//! - `PROMPTBOX_DB_PATH`: SQLite file (default `<data dir>/promptbox/promptbox.db`)
//! - `PROMPTBOX_MAX_WRITE_BYTES`: size guard ceiling (default 4.5 MiB)

use std::path::PathBuf;

use crate::errors::{PromptError, Result};
use crate::size_guard::DEFAULT_MAX_WRITE_BYTES;

pub const DB_PATH_VAR: &str = "PROMPTBOX_DB_PATH";
pub const MAX_WRITE_BYTES_VAR: &str = "PROMPTBOX_MAX_WRITE_BYTES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path:         PathBuf,
    pub max_write_bytes: usize,
}

impl Config {
    /// Load `.env` (if any) and read the environment
    pub fn from_env() -> Result<Self> {
        // A missing .env file is normal
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = match lookup(DB_PATH_VAR).filter(|v| !v.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_db_path()?,
        };

        let max_write_bytes = match lookup(MAX_WRITE_BYTES_VAR) {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                PromptError::ConfigError(format!(
                    "{} must be a positive integer, got '{}'",
                    MAX_WRITE_BYTES_VAR, raw
                ))
            })?,
            None => DEFAULT_MAX_WRITE_BYTES,
        };
        if max_write_bytes == 0 {
            return Err(PromptError::ConfigError(format!(
                "{} must be greater than zero",
                MAX_WRITE_BYTES_VAR
            )));
        }

        Ok(Self {
            db_path,
            max_write_bytes,
        })
    }
}

/// `<data dir>/promptbox/promptbox.db`
pub fn default_db_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| PromptError::ConfigError("Could not determine data directory".into()))?;
    Ok(data_dir.join("promptbox").join("promptbox.db"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_lookup(lookup(&[
            (DB_PATH_VAR, "/tmp/p.db"),
            (MAX_WRITE_BYTES_VAR, " 1024 "),
        ]))
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/p.db"));
        assert_eq!(config.max_write_bytes, 1024);
    }

    #[test]
    fn test_default_ceiling() {
        let config = Config::from_lookup(lookup(&[(DB_PATH_VAR, "/tmp/p.db")])).unwrap();
        assert_eq!(config.max_write_bytes, DEFAULT_MAX_WRITE_BYTES);
    }

    #[test]
    fn test_invalid_ceiling() {
        let err = Config::from_lookup(lookup(&[
            (DB_PATH_VAR, "/tmp/p.db"),
            (MAX_WRITE_BYTES_VAR, "lots"),
        ]))
        .unwrap_err();
        assert_eq!(err.category(), "config");

        let err = Config::from_lookup(lookup(&[
            (DB_PATH_VAR, "/tmp/p.db"),
            (MAX_WRITE_BYTES_VAR, "0"),
        ]))
        .unwrap_err();
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn test_default_db_path_shape() {
        if let Ok(path) = default_db_path() {
            assert!(path.ends_with("promptbox/promptbox.db"));
        }
    }
}
