use crate::config::DEFAULT_GROUP;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author = "Gokul <@bahdotsh>",
    version = env!("CARGO_PKG_VERSION"),
    about = "snip - render snippets from your .snip files",
    long_about = "snip recursively scans the snippets root for *.snip files, one group per file, \
                  and renders snippets with positional arguments. The root is taken from --root, \
                  then SNIP_SNIPPETS_ROOT, then ~/.vim."
)]
pub struct Snip {
    #[clap(long, short = 'r', help = "Directory to scan for .snip files")]
    pub root: Option<PathBuf>,

    #[clap(
        long,
        short = 'g',
        default_value = DEFAULT_GROUP,
        help = "Snippet group (snippet file name without the .snip extension)"
    )]
    pub group: String,

    #[clap(long = "no-cache", help = "Do not write the JSON export of loaded groups")]
    pub no_cache: bool,

    #[clap(subcommand)]
    pub commands: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a snippet, substituting positional arguments
    Show {
        #[clap(help = "Name of the snippet")]
        name: String,

        #[clap(help = "Values for $0, $1, ... placeholders")]
        args: Vec<String>,
    },
    /// List snippet names in the group
    Ls,
    /// List all groups with their source files
    Groups,
}
