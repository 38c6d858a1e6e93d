//! Line-oriented parser for `.snip` files.
//!
//! ```text
//! # comment
//! snippet fn
//! alias f
//! abbr func ...
//!     func ${0:name}() {
//!     }
//! ```

use crate::error::Result;
use crate::models::{leading_spaces, Snippet};
use std::io::BufRead;

const SNIPPET_KEYWORD: &str = "snippet";
const ABBR_KEYWORD: &str = "abbr";
const ALIAS_KEYWORD: &str = "alias";

/// What a single trimmed line of a snippet file means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Comment,
    Blank,
    /// `snippet <name>`; `name` is `None` when the header has no name token.
    Header { name: Option<&'a str> },
    Abbr(&'a str),
    /// `alias <name>`; only the second token is kept.
    Alias(&'a str),
    Content,
}

impl<'a> LineKind<'a> {
    /// Classify a line that has already been trimmed.
    pub fn classify(line: &'a str) -> Self {
        if line.starts_with('#') {
            return LineKind::Comment;
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            None => LineKind::Blank,
            Some(SNIPPET_KEYWORD) => LineKind::Header {
                name: tokens.next(),
            },
            Some(ABBR_KEYWORD) => LineKind::Abbr(line[ABBR_KEYWORD.len()..].trim()),
            Some(ALIAS_KEYWORD) => LineKind::Alias(tokens.next().unwrap_or("")),
            Some(_) => LineKind::Content,
        }
    }
}

/// Accumulates snippets one line at a time.
///
/// Holds at most one open snippet; a header or the end of input commits it.
#[derive(Debug, Default)]
pub struct SnippetParser {
    parsed: Vec<Snippet>,
    current: Option<Snippet>,
}

impl SnippetParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw, untrimmed line.
    pub fn feed(&mut self, raw: &str) {
        match LineKind::classify(raw.trim()) {
            LineKind::Comment => {}
            LineKind::Header { name } => {
                self.commit();
                self.current = name.map(|name| Snippet {
                    name: name.to_string(),
                    abbr: String::new(),
                    alias: String::new(),
                    body: Vec::new(),
                    min_indent: None,
                });
            }
            LineKind::Abbr(abbr) => {
                if let Some(current) = self.current.as_mut() {
                    current.abbr = abbr.to_string();
                }
            }
            LineKind::Alias(alias) => {
                if let Some(current) = self.current.as_mut() {
                    current.alias = alias.to_string();
                }
            }
            kind @ (LineKind::Blank | LineKind::Content) => {
                if let Some(current) = self.current.as_mut() {
                    if kind == LineKind::Content {
                        let indent = leading_spaces(raw);
                        current.min_indent =
                            Some(current.min_indent.map_or(indent, |min| min.min(indent)));
                    }
                    current.body.push(raw.to_string());
                }
            }
        }
    }

    /// Close the open snippet. Snippets without body lines are dropped.
    fn commit(&mut self) {
        if let Some(snippet) = self.current.take() {
            if !snippet.body.is_empty() {
                self.parsed.push(snippet);
            }
        }
    }

    pub fn finish(mut self) -> Vec<Snippet> {
        self.commit();
        self.parsed
    }
}

/// Parse every snippet from `reader`.
///
/// A read error aborts the whole parse.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<Snippet>> {
    let mut parser = SnippetParser::new();
    for line in reader.lines() {
        parser.feed(&line?);
    }
    Ok(parser.finish())
}

/// Parse snippets from in-memory text.
pub fn parse_str(text: &str) -> Vec<Snippet> {
    let mut parser = SnippetParser::new();
    for line in text.lines() {
        parser.feed(line);
    }
    parser.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnipError;
    use std::io::{self, BufReader, Read};

    const SNIPPET_TEXT: &str = "
snippet foo
alias f
abbr foo ...
    foobar

# comment
snippet multiline
alias m
abbr multiline ...
    bar

\tfuzzbuzz


";

    fn lines(body: &[&str]) -> Vec<String> {
        body.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn classify_lines() {
        assert_eq!(LineKind::classify("# snippet foo"), LineKind::Comment);
        assert_eq!(LineKind::classify(""), LineKind::Blank);
        assert_eq!(
            LineKind::classify("snippet foo bar"),
            LineKind::Header { name: Some("foo") }
        );
        assert_eq!(
            LineKind::classify("snippet\tfoo"),
            LineKind::Header { name: Some("foo") }
        );
        assert_eq!(LineKind::classify("snippet"), LineKind::Header { name: None });
        assert_eq!(
            LineKind::classify("abbr  func ... "),
            LineKind::Abbr("func ...")
        );
        assert_eq!(LineKind::classify("alias f extra"), LineKind::Alias("f"));
        assert_eq!(LineKind::classify("alias"), LineKind::Alias(""));
        assert_eq!(LineKind::classify("snippets are fun"), LineKind::Content);
        assert_eq!(LineKind::classify("abbreviation"), LineKind::Content);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_str("").is_empty());
    }

    #[test]
    fn parses_two_snippets_with_multiline_bodies() {
        let parsed = parse_str(SNIPPET_TEXT);
        assert_eq!(parsed.len(), 2);

        let foo = &parsed[0];
        assert_eq!(foo.name(), "foo");
        assert_eq!(foo.alias(), "f");
        assert_eq!(foo.abbr(), "foo ...");
        assert_eq!(foo.body(), lines(&["    foobar", ""]).as_slice());
        assert_eq!(foo.min_indent(), Some(4));

        let multi = &parsed[1];
        assert_eq!(multi.name(), "multiline");
        assert_eq!(multi.alias(), "m");
        assert_eq!(multi.abbr(), "multiline ...");
        assert_eq!(
            multi.body(),
            lines(&["    bar", "", "\tfuzzbuzz", "", ""]).as_slice()
        );
        assert_eq!(multi.min_indent(), Some(0));
    }

    #[test]
    fn renders_parsed_text() {
        let given = "
snippet foo
alias f
abbr foo ...
    foobar

snippet multiline
alias m
abbr multiline ...
    bar
        fuzzbuzz
";
        let parsed = parse_str(given);
        assert_eq!(parsed[0].text(), "foobar\n");
        assert_eq!(parsed[1].text(), "bar\n    fuzzbuzz");
    }

    #[test]
    fn single_header_with_indented_body() {
        let parsed = parse_str("snippet X\n    hello world\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name(), "X");
        assert_eq!(parsed[0].text(), "hello world");
    }

    #[test]
    fn header_without_name_is_dropped() {
        assert!(parse_str("snippet   \n    body\n").is_empty());

        let parsed = parse_str("snippet\nalias x\n    lost\nsnippet kept\n    body\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name(), "kept");
        assert_eq!(parsed[0].alias(), "");
    }

    #[test]
    fn header_without_body_is_dropped() {
        let parsed = parse_str("snippet a\nsnippet b\n    body\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name(), "b");

        assert!(parse_str("snippet a\nalias x\nabbr y\n").is_empty());
    }

    #[test]
    fn lines_before_first_header_are_ignored() {
        let parsed = parse_str("stray text\nalias nope\n\nsnippet a\n  x\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].body(), lines(&["  x"]).as_slice());
        assert_eq!(parsed[0].alias(), "");
    }

    #[test]
    fn blank_only_body_keeps_no_indent() {
        let parsed = parse_str("snippet blank\n\n   \n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].min_indent(), None);
        assert_eq!(parsed[0].body(), lines(&["", "   "]).as_slice());
    }

    #[test]
    fn duplicate_names_are_all_kept() {
        let parsed = parse_str("snippet dup\n  one\nsnippet dup\n  two\n");
        assert_eq!(parsed.len(), 2);
        assert!(parsed.iter().all(|s| s.name() == "dup"));
    }

    #[test]
    fn comments_inside_body_are_skipped() {
        let parsed = parse_str("snippet a\n  one\n  # hidden\n  two\n");
        assert_eq!(parsed[0].body(), lines(&["  one", "  two"]).as_slice());
    }

    #[test]
    fn reader_and_str_agree() {
        let from_reader = parse(SNIPPET_TEXT.as_bytes()).unwrap();
        assert_eq!(from_reader, parse_str(SNIPPET_TEXT));
    }

    struct ErrReader;

    impl Read for ErrReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }
    }

    #[test]
    fn read_failure_fails_the_parse() {
        match parse(BufReader::new(ErrReader)) {
            Err(SnipError::Io(err)) => assert_eq!(err.to_string(), "boom"),
            other => panic!("expected I/O error, got {:?}", other),
        }
    }
}
