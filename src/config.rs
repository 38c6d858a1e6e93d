use std::env;
use std::path::PathBuf;

pub const SNIPPET_EXT: &str = "snip";
pub const DEFAULT_GROUP: &str = "go";
pub const SNIPPETS_ROOT_ENV: &str = "SNIP_SNIPPETS_ROOT";
pub const CACHE_FILENAME: &str = "groups.json";

fn home_dir() -> Option<PathBuf> {
    env::var("HOME").ok().map(PathBuf::from)
}

/// Get the snip configuration directory
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .map(|home| home.join(".snip"))
        .unwrap_or_else(|| PathBuf::from(".snip"))
}

/// Get the path to the JSON export of the last load
pub fn get_cache_file_path() -> PathBuf {
    get_config_dir().join(CACHE_FILENAME)
}

/// Directory scanned for `.snip` files.
///
/// `--root` wins, then a non-blank `SNIP_SNIPPETS_ROOT` value, then `~/.vim`.
pub fn resolve_root(cli_root: Option<PathBuf>, env_root: Option<String>) -> PathBuf {
    cli_root.unwrap_or_else(|| snippets_root_from(env_root))
}

fn snippets_root_from(custom: Option<String>) -> PathBuf {
    match custom {
        Some(root) if !root.trim().is_empty() => PathBuf::from(root.trim()),
        _ => home_dir()
            .map(|home| home.join(".vim"))
            .unwrap_or_else(|| PathBuf::from(".vim")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_root_is_trimmed() {
        let root = snippets_root_from(Some("  /tmp/snippets \n".to_string()));
        assert_eq!(root, PathBuf::from("/tmp/snippets"));
    }

    #[test]
    fn blank_custom_root_falls_back_to_vim_dir() {
        let root = snippets_root_from(Some("   ".to_string()));
        assert!(root.ends_with(".vim"));

        let root = snippets_root_from(None);
        assert!(root.ends_with(".vim"));
    }

    #[test]
    fn cli_root_wins_over_env_root() {
        let root = resolve_root(
            Some(PathBuf::from("/from/cli")),
            Some("/from/env".to_string()),
        );
        assert_eq!(root, PathBuf::from("/from/cli"));

        let root = resolve_root(None, Some("/from/env".to_string()));
        assert_eq!(root, PathBuf::from("/from/env"));
    }
}
