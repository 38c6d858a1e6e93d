//! Snip - a personal library of reusable snippets.
//!
//! Snippets live in `.snip` files, one group per file, and are rendered by
//! substituting positional arguments into `$N` / `${N:default}` placeholders.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod expansion;
pub mod models;
pub mod parser;
pub mod storage;

// Re-export
pub use cli::{Commands, Snip};
pub use config::{resolve_root, DEFAULT_GROUP, SNIPPET_EXT};
pub use error::{Result, SnipError};
pub use expansion::{expand_var, expand_vars, parse_var, Placeholder};
pub use models::{Group, Groups, Snippet};
pub use parser::{parse, parse_str, LineKind, SnippetParser};
pub use storage::{load_from_dir, parse_file, save_groups};
