//! Positional placeholder expansion.
//!
//! Placeholders are `$N`, `${N}` and `${N:default}`. Anything that looks like
//! a placeholder but has no valid index is left as is.

use regex::Regex;
use std::sync::OnceLock;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\$\{.*?\}|\$\d+?)").expect("placeholder pattern is valid"))
}

/// A placeholder token split into its index and default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub index: usize,
    pub default: &'a str,
}

/// Parse an integer the way literal prefixes read: `0x` hex, `0o` octal,
/// `0b` binary, a bare leading `0` octal, decimal otherwise. A single
/// leading `+` is allowed.
fn parse_index(raw: &str) -> Option<usize> {
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let (digits, radix) = if let Some(hex) = raw.strip_prefix("0x").or(raw.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(oct) = raw.strip_prefix("0o").or(raw.strip_prefix("0O")) {
        (oct, 8)
    } else if let Some(bin) = raw.strip_prefix("0b").or(raw.strip_prefix("0B")) {
        (bin, 2)
    } else if raw.len() > 1 && raw.starts_with('0') {
        (&raw[1..], 8)
    } else {
        (raw, 10)
    };

    // from_str_radix would take a second '+' after the prefix
    if digits.starts_with('+') {
        return None;
    }
    usize::from_str_radix(digits, radix).ok()
}

/// Split a matched token such as `${1:fn}` into index and default.
///
/// Only the first `:` separates; the rest belongs to the default.
pub fn parse_var(token: &str) -> Option<Placeholder<'_>> {
    let inner = token.strip_prefix('$').unwrap_or(token);
    let inner = inner
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(inner);

    let (index, default) = inner.split_once(':').unwrap_or((inner, ""));
    Some(Placeholder {
        index: parse_index(index)?,
        default,
    })
}

/// Resolve one token: a non-empty argument wins, else the default.
/// Unparseable tokens come back unchanged.
pub fn expand_var<S: AsRef<str>>(token: &str, args: &[S]) -> String {
    match parse_var(token) {
        Some(var) => match args.get(var.index).map(AsRef::as_ref) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => var.default.to_string(),
        },
        None => token.to_string(),
    }
}

/// Substitute every placeholder in `text`.
///
/// Each discovered token is replaced everywhere it occurs, so identical
/// tokens always expand to the same value.
pub fn expand_vars<S: AsRef<str>>(text: &str, args: &[S]) -> String {
    let tokens: Vec<&str> = placeholder_re()
        .find_iter(text)
        .map(|m| m.as_str())
        .collect();

    let mut expanded = text.to_string();
    for token in tokens {
        expanded = expanded.replace(token, &expand_var(token, args));
    }
    expanded
}
