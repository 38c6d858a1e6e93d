use crate::config::SNIPPET_EXT;
use crate::error::Result;
use crate::models::{Group, Groups, Snippet};
use crate::parser::parse;
use chrono::Local;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Parse every snippet in a single file
pub fn parse_file(path: &Path) -> Result<Vec<Snippet>> {
    let file = File::open(path)?;
    parse(BufReader::new(file))
}

/// Group key for a snippet file: its name without the `.snip` extension.
fn group_key(path: &Path) -> Option<&str> {
    if path.extension()? != SNIPPET_EXT {
        return None;
    }
    path.file_stem()?.to_str()
}

/// Walk `root` recursively and parse every `.snip` file into a group.
///
/// Files are visited in file-name order. When two files share a group key the
/// one visited last replaces the other. Any walk or read error aborts the
/// whole load.
pub fn load_from_dir(root: &Path) -> Result<Groups> {
    let mut groups = Groups::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        // follows symlinks, so linked snippet files are loaded too
        if !entry.path().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(key) = group_key(path) else {
            debug!(path = %path.display(), "skipping non-snippet file");
            continue;
        };

        let snippets = parse_file(path)?;
        debug!(
            group = key,
            path = %path.display(),
            count = snippets.len(),
            "parsed snippet file"
        );

        if let Some(previous) = groups.insert(key, Group::new(path, snippets)) {
            debug!(
                group = key,
                replaced = %previous.source_filename().display(),
                "group defined more than once"
            );
        }
    }

    Ok(groups)
}

#[derive(Serialize)]
struct CacheFile<'a> {
    generated_at: String,
    groups: &'a Groups,
}

/// Write `groups` as pretty JSON to `path`, creating its directory if needed
pub fn save_groups(groups: &Groups, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let cache = CacheFile {
        generated_at: Local::now().to_rfc3339(),
        groups,
    };

    let serialized = serde_json::to_string_pretty(&cache)?;
    fs::write(path, serialized)?;

    info!(path = %path.display(), groups = groups.len(), "saved snippet cache");
    Ok(())
}
