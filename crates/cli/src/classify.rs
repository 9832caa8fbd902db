// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregation of resolved patterns into one classification map.
//!
//! Patterns are compared as exact strings. A pattern classified as
//! non-generated stays non-generated: later directives for the same pattern
//! cannot flip it back.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::Serialize;

/// Resolved scope pattern → generated flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassificationMap {
    entries: BTreeMap<String, bool>,
}

/// Effect of a single merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Pattern was not present.
    Inserted,
    /// Pattern was generated and took the incoming value.
    Updated,
    /// Pattern was already non-generated; incoming value ignored.
    Kept,
}

impl ClassificationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one pattern classification.
    pub fn merge(&mut self, pattern: impl Into<String>, generated: bool) -> MergeOutcome {
        match self.entries.entry(pattern.into()) {
            Entry::Vacant(entry) => {
                entry.insert(generated);
                MergeOutcome::Inserted
            }
            Entry::Occupied(mut entry) if *entry.get() => {
                entry.insert(generated);
                MergeOutcome::Updated
            }
            Entry::Occupied(entry) => {
                if generated {
                    tracing::debug!("keeping '{}' non-generated", entry.key());
                }
                MergeOutcome::Kept
            }
        }
    }

    /// Merge every pattern with the same classification.
    pub fn merge_all<I, S>(&mut self, patterns: I, generated: bool)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for pattern in patterns {
            self.merge(pattern, generated);
        }
    }

    pub fn get(&self, pattern: &str) -> Option<bool> {
        self.entries.get(pattern).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(p, g)| (p.as_str(), *g))
    }

    /// Patterns with the given classification, in pattern order.
    pub fn patterns(&self, generated: bool) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(move |(_, g)| *g == generated)
            .map(|(p, _)| p)
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
