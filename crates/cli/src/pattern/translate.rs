// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob dialect translation.
//!
//! A gitignore pattern is first canonicalized (anchors stripped, recursive
//! suffixes folded into `//*`, degenerate `**` collapsed), then every
//! remaining `**/` segment is expanded into its "no directory" and
//! "one directory" readings.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Scope-dialect suffix matching every file below a directory.
pub const ALL_DESCENDANTS: &str = "//*";

/// Default cap on `**/` segments expanded per pattern (2^10 candidates).
pub const DEFAULT_MAX_RECURSIVE_SEGMENTS: usize = 10;

/// Hard upper bound on the configurable cap.
const MAX_SUPPORTED_RECURSIVE_SEGMENTS: usize = 20;

/// A standalone recursive wildcard segment.
const RECURSIVE_SEGMENT: &str = "**/";

/// Readings of one `**/` segment: zero directories or exactly one.
const RECURSIVE_READINGS: [&str; 2] = ["", "*/"];

/// Trailing `*/**`.
#[allow(clippy::expect_used)]
static ONE_THEN_RECURSIVE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:/|^)\*/\*\*$").expect("valid regex"));

/// Trailing `**/*`.
#[allow(clippy::expect_used)]
static RECURSIVE_THEN_ONE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:/|^)\*\*/\*$").expect("valid regex"));

/// Trailing `**`.
#[allow(clippy::expect_used)]
static RECURSIVE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:/|^)\*\*$").expect("valid regex"));

/// Translates gitignore globs, bounding the combinatorial expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    max_recursive_segments: usize,
}

impl Default for Translator {
    fn default() -> Self {
        Self {
            max_recursive_segments: DEFAULT_MAX_RECURSIVE_SEGMENTS,
        }
    }
}

impl Translator {
    /// Create a translator expanding at most `max_recursive_segments` `**/`
    /// segments per pattern (clamped to 20).
    pub fn new(max_recursive_segments: usize) -> Self {
        Self {
            max_recursive_segments: max_recursive_segments.min(MAX_SUPPORTED_RECURSIVE_SEGMENTS),
        }
    }

    pub fn max_recursive_segments(&self) -> usize {
        self.max_recursive_segments
    }

    /// Translate one gitignore pattern into the set of scope patterns.
    ///
    /// Returns an empty set only when the pattern has more `**/` segments
    /// than the configured cap.
    pub fn translate(&self, pattern: &str) -> BTreeSet<String> {
        let canonical = canonicalize(pattern);
        let parts: Vec<&str> = canonical.split(RECURSIVE_SEGMENT).collect();
        let recursive = parts.len() - 1;

        if recursive == 0 {
            return BTreeSet::from([canonical]);
        }
        if recursive > self.max_recursive_segments {
            tracing::warn!(
                "skipping pattern '{}': {} recursive segments exceed limit of {}",
                pattern,
                recursive,
                self.max_recursive_segments
            );
            return BTreeSet::new();
        }

        (0..1usize << recursive)
            .map(|mask| {
                let mut expanded = String::with_capacity(canonical.len() + recursive * 2);
                for (idx, part) in parts.iter().enumerate() {
                    expanded.push_str(part);
                    if idx < recursive {
                        expanded.push_str(RECURSIVE_READINGS[(mask >> idx) & 1]);
                    }
                }
                expanded
            })
            .collect()
    }
}

/// Translate with the default expansion cap.
pub fn translate(pattern: &str) -> BTreeSet<String> {
    Translator::default().translate(pattern)
}

/// Rewrite a gitignore pattern into scope syntax, leaving `**/` segments in place.
pub fn canonicalize(pattern: &str) -> String {
    let mut canonical = pattern.trim_start_matches('/').to_string();

    for suffix in [
        &ONE_THEN_RECURSIVE_SUFFIX,
        &RECURSIVE_THEN_ONE_SUFFIX,
        &RECURSIVE_SUFFIX,
    ] {
        canonical = suffix.replace(&canonical, ALL_DESCENDANTS).into_owned();
    }

    // A recursive segment next to a single-segment wildcard needs at least
    // one directory, which `*` already expresses.
    let canonical = collapse_segment_pair(&canonical, "**", "*");
    let canonical = collapse_segment_pair(&canonical, "*", "**");

    canonical
        .split('/')
        .map(degrade_glued_double_star)
        .collect::<Vec<_>>()
        .join("/")
}

/// Replace each adjacent `first/second` segment pair with a single `*` segment.
fn collapse_segment_pair(pattern: &str, first: &str, second: &str) -> String {
    let segments: Vec<&str> = pattern.split('/').collect();
    let mut collapsed = Vec::with_capacity(segments.len());
    let mut idx = 0;

    while idx < segments.len() {
        if segments[idx] == first && segments.get(idx + 1) == Some(&second) {
            collapsed.push("*");
            idx += 2;
        } else {
            collapsed.push(segments[idx]);
            idx += 1;
        }
    }

    collapsed.join("/")
}

/// Degrade `**` glued to literal characters within a segment to `*`.
///
/// Leading occurrences are handled first, then trailing ones, so a segment
/// that is exactly `**` survives both passes.
fn degrade_glued_double_star(segment: &str) -> String {
    let segment = collapse_double_star(segment, |start, _| start > 0);
    collapse_double_star(&segment, |start, len| start + 2 < len)
}

/// Scan left to right, replacing non-overlapping `**` runs for which `glued`
/// holds with a single `*`.
fn collapse_double_star(segment: &str, glued: impl Fn(usize, usize) -> bool) -> String {
    let bytes = segment.as_bytes();
    let mut out = String::with_capacity(segment.len());
    let mut copied = 0;
    let mut idx = 0;

    while idx + 1 < bytes.len() {
        if bytes[idx] == b'*' && bytes[idx + 1] == b'*' && glued(idx, bytes.len()) {
            out.push_str(&segment[copied..idx]);
            out.push('*');
            idx += 2;
            copied = idx;
        } else {
            idx += 1;
        }
    }

    out.push_str(&segment[copied..]);
    out
}

#[cfg(test)]
#[path = "translate_tests.rs"]
mod tests;
