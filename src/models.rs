use crate::expansion::expand_vars;
use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// One parsed template unit.
///
/// Snippets are immutable once the parser hands them out.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub(crate) name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub(crate) abbr: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub(crate) alias: String,
    pub(crate) body: Vec<String>,
    /// Smallest count of leading spaces over the non-blank body lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) min_indent: Option<usize>,
}

impl Snippet {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abbr(&self) -> &str {
        &self.abbr
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }

    pub fn min_indent(&self) -> Option<usize> {
        self.min_indent
    }

    /// Body joined with newlines, with the common left margin removed.
    ///
    /// Blank lines pass through untouched. A line never loses more than its
    /// own leading spaces, so tab-indented lines keep their tabs.
    pub fn text(&self) -> String {
        let margin = self.min_indent.unwrap_or(0);
        self.body
            .iter()
            .map(|line| {
                if margin == 0 || line.trim().is_empty() {
                    return line.as_str();
                }
                let strip = leading_spaces(line).min(margin);
                &line[strip..]
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the body and substitute `args` into its placeholders.
    pub fn render<S: AsRef<str>>(&self, args: &[S]) -> String {
        expand_vars(&self.text(), args)
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

pub(crate) fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// The snippets parsed from a single `.snip` file, in file order.
#[derive(Serialize, Debug, Clone)]
pub struct Group {
    pub(crate) source_filename: PathBuf,
    pub(crate) snippets: Vec<Snippet>,
}

impl Group {
    pub fn new(source_filename: impl Into<PathBuf>, snippets: Vec<Snippet>) -> Self {
        Self {
            source_filename: source_filename.into(),
            snippets,
        }
    }

    pub fn source_filename(&self) -> &Path {
        &self.source_filename
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// First snippet in file order whose name equals `name`.
    // TODO: fall back to matching `alias` once the lookup order for alias
    // collisions across snippets is decided.
    pub fn find(&self, name: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.snippets.iter().map(|s| s.name.as_str())
    }

    /// Write snippet names, one per line
    pub fn print_names<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for name in self.names() {
            writeln!(w, "{}", name)?;
        }
        Ok(())
    }
}

/// Group name (file stem) to group.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct Groups(BTreeMap<String, Group>);

impl Groups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a group, replacing any group already stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, group: Group) -> Option<Group> {
        self.0.insert(key.into(), group)
    }

    pub fn get(&self, key: &str) -> Option<&Group> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Group> {
        self.0.iter()
    }

    /// Write `name\t(source file)` for every group
    pub fn print_names<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for (name, group) in self.iter() {
            writeln!(w, "{}\t({})", name, group.source_filename.display())?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Groups {
    type Item = (&'a String, &'a Group);
    type IntoIter = btree_map::Iter<'a, String, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
