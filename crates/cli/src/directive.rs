// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of `linguist-generated` lines in `.gitattributes` files.
//!
//! Parsing is total: comments, unrelated attributes, and malformed lines
//! yield `None` rather than an error.

/// Attribute name a directive line must end with.
pub const GENERATED_ATTRIBUTE: &str = "linguist-generated";

/// A parsed `linguist-generated` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Path fragment in gitignore glob syntax, without any `!` prefix.
    pub path: String,
    /// Whether the attribute value marks the path as generated.
    pub generated: bool,
    /// Whether the path token carried a `!` prefix.
    pub negated: bool,
}

impl Directive {
    /// Effective classification once negation is applied.
    pub fn is_generated(&self) -> bool {
        self.generated != self.negated
    }
}

/// Parse a single line of directive text.
///
/// `=false` and the unset form `-linguist-generated` both classify the path
/// as not generated.
pub fn parse_line(line: &str) -> Option<Directive> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    if line.starts_with('#') {
        return None;
    }

    let key = line.strip_suffix("=true").unwrap_or(line);
    let key = key.strip_suffix("=false").unwrap_or(key);
    if !key.ends_with(GENERATED_ATTRIBUTE) {
        return None;
    }

    let mut tokens = line.split_whitespace();
    let path_token = tokens.next()?;
    let key_token = tokens.last()?;

    let (path, negated) = match path_token.strip_prefix('!') {
        Some(rest) => (rest, true),
        None => (path_token, false),
    };
    if path.is_empty() {
        return None;
    }

    Some(Directive {
        path: path.to_string(),
        generated: !line.ends_with("=false") && !key_token.starts_with('-'),
        negated,
    })
}

/// Parse every line of a directive file.
///
/// Yields `(line_number, directive)` pairs with 1-based line numbers, in file order.
pub fn parse_text(text: &str) -> impl Iterator<Item = (usize, Directive)> + '_ {
    text.split('\n')
        .enumerate()
        .filter_map(|(idx, line)| parse_line(line).map(|d| (idx + 1, d)))
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;
