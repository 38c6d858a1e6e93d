use crate::cli::{Commands, Snip};
use crate::config::{get_cache_file_path, resolve_root, SNIPPETS_ROOT_ENV};
use crate::error::{Result, SnipError};
use crate::models::{Group, Groups};
use crate::storage::{load_from_dir, save_groups};
use std::env;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

pub fn handle_command(args: Snip) -> Result<()> {
    let env_root = env::var(SNIPPETS_ROOT_ENV).ok();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(args, env_root, &get_cache_file_path(), &mut out)
}

/// Load the snippets root, export the cache, then run the subcommand.
///
/// The export happens before the group lookup, so it is written even when
/// the requested group does not exist.
pub fn execute<W: Write>(
    args: Snip,
    env_root: Option<String>,
    cache_path: &Path,
    out: &mut W,
) -> Result<()> {
    let root = resolve_root(args.root, env_root);
    debug!(root = %root.display(), "loading snippets");
    let groups = load_from_dir(&root)?;

    if !args.no_cache {
        save_groups(&groups, cache_path)?;
    }

    run(&groups, &args.group, args.commands, out)
}

fn find_group<'a>(groups: &'a Groups, group: &str) -> Result<&'a Group> {
    groups
        .get(group)
        .ok_or_else(|| SnipError::GroupNotFound(group.to_string()))
}

/// Execute `command` against already loaded groups, writing to `out`.
pub fn run<W: Write>(groups: &Groups, group: &str, command: Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::Show { name, args } => {
            let snippet = find_group(groups, group)?
                .find(&name)
                .ok_or_else(|| SnipError::SnippetNotFound {
                    group: group.to_string(),
                    name: name.clone(),
                })?;
            writeln!(out, "{}", snippet.render(&args))?;
        }
        Commands::Ls => find_group(groups, group)?.print_names(out)?,
        Commands::Groups => groups.print_names(out)?,
    }
    Ok(())
}
