//! Per-line classification for the locale file parser.
//!
//! Each raw line is looked at in isolation: blank, comment, `key: value`
//! entry, or something the parser does not understand. Nothing here tracks
//! nesting; that is the tree builder's job.

use std::sync::LazyLock;

use regex::Regex;

// Capture groups: 1 = leading whitespace, 2 = key token, 3 = rest of the line.
// The key may be quoted but never contains a colon, so the first colon on
// the line is always the separator.
static KEY_VALUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(\s*)(['"]?[^:]+['"]?):\s*(.*)$"#).unwrap());

/// Values that open a multi-line block scalar.
const BLOCK_SCALAR_INDICATORS: &[&str] = &["|", ">", "|-", ">-"];

/// Inline value that denotes an explicitly empty mapping.
const EMPTY_MAPPING_TOKEN: &str = "{}";

/// Classification of a single raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// Trimmed content starts with `#`.
    Comment,
    /// A `key: value` line.
    Entry(Entry<'a>),
    /// Anything else (list items without a colon, stray text). Skipped.
    Unrecognized,
}

/// A `key: value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    /// Number of leading whitespace characters.
    pub indent: usize,
    /// Trimmed key with wrapping quotes removed.
    pub key: &'a str,
    /// Trimmed raw value (quotes not yet removed).
    pub value: &'a str,
}

impl<'a> Entry<'a> {
    pub fn value_kind(&self) -> ValueKind<'a> {
        classify_value(self.value)
    }
}

/// What an entry's value asks the tree builder to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind<'a> {
    /// `|`, `>`, `|-` or `>-`: following deeper lines form the value.
    BlockScalar,
    /// Empty value or `{}`: opens a (possibly empty) nested mapping.
    Mapping,
    /// Inline scalar with one level of wrapping quotes removed.
    Scalar(&'a str),
}

/// Classify one raw line (without its line terminator).
pub fn classify(raw: &str) -> Line<'_> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with('#') {
        return Line::Comment;
    }

    let Some(captures) = KEY_VALUE_REGEX.captures(raw) else {
        return Line::Unrecognized;
    };

    let indent = captures.get(1).map_or(0, |m| m.as_str().chars().count());
    let key = captures.get(2).map_or("", |m| m.as_str().trim());
    let value = captures.get(3).map_or("", |m| m.as_str().trim());

    Line::Entry(Entry {
        indent,
        key: strip_wrapping_quotes(key),
        value,
    })
}

pub fn classify_value(value: &str) -> ValueKind<'_> {
    if BLOCK_SCALAR_INDICATORS.contains(&value) {
        ValueKind::BlockScalar
    } else if value.is_empty() || value == EMPTY_MAPPING_TOKEN {
        ValueKind::Mapping
    } else {
        ValueKind::Scalar(strip_wrapping_quotes(value))
    }
}

/// Count leading whitespace characters.
pub fn leading_whitespace(raw: &str) -> usize {
    raw.chars().take_while(|c| c.is_whitespace()).count()
}

/// Whether `raw` continues a block scalar opened by a key at `open_indent`.
///
/// Blank lines always continue the block so that paragraph breaks inside
/// the literal survive.
pub fn is_block_continuation(raw: &str, open_indent: usize) -> bool {
    raw.trim().is_empty() || leading_whitespace(raw) > open_indent
}

/// Remove one level of matching `"` or `'` quotes wrapping the whole token.
///
/// A token with a quote on only one side is returned unchanged.
pub fn strip_wrapping_quotes(token: &str) -> &str {
    for quote in ['"', '\''] {
        if token.len() >= 2
            && let Some(inner) = token
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    token
}
