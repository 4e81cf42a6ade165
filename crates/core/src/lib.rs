//! promptbox: a local prompt library
//!
//! Saves, searches, tags, categorizes, copies, deletes, exports and imports
//! small text records ("prompts") kept in a local key-value store.
//!
//! ## Architecture
//!
//! - **Store adapter** (`db`): whole-collection reads and writes against
//!   SQLite or an in-memory map, behind the `KvStore` trait
//! - **Pure engines**: `filter`, `merge`, `normalize`, `size_guard`,
//!   `transfer` (import validation and export format)
//! - **Services**: `categories` (registry) and `library` (user actions)
//! - **Commands** (`commands`): JSON command registry the presentation layer
//!   calls; failures come back as structured error objects

// Module declarations
pub mod categories;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod db;
pub mod errors;
pub mod filter;
pub mod id;
pub mod library;
pub mod merge;
pub mod normalize;
pub mod prompt;
pub mod runtime;
pub mod size_guard;
pub mod transfer;

pub use categories::CategoryRegistry;
pub use errors::{PromptError, Result};
pub use library::PromptLibrary;
pub use prompt::{CategoryChoice, Prompt, PromptDraft, DEFAULT_CATEGORY};
