// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scope computation from directive file contents.
//!
//! The engine is pure: callers hand it every directive file as a
//! root-relative path plus its text, and get back the classification map
//! and both scopes. Sources are processed in path order, then line order,
//! so repeated runs over the same input are identical.

use serde::Serialize;

use crate::classify::ClassificationMap;
use crate::directive::parse_text;
use crate::pattern::{SourceDir, Translator, resolve};
use crate::scope::Scopes;

/// One directive file's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveSource {
    /// Path relative to the project root, `/`-separated.
    pub path: String,
    /// UTF-8 file text.
    pub text: String,
}

impl DirectiveSource {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// Counters collected during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    /// Directive files processed.
    pub files: usize,
    /// `linguist-generated` lines parsed.
    pub directives: usize,
    /// Translations dropped because a segment was exactly `@`.
    pub unencodable: usize,
    /// Directives skipped because they exceeded the `**/` expansion limit.
    pub over_limit: usize,
}

/// Result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub map: ClassificationMap,
    pub scopes: Scopes,
    pub stats: EngineStats,
}

/// Computes generated scopes from directive sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    translator: Translator,
}

impl Engine {
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    /// Build the classification map from all sources.
    pub fn classify<I>(&self, sources: I) -> (ClassificationMap, EngineStats)
    where
        I: IntoIterator<Item = DirectiveSource>,
    {
        let mut sources: Vec<_> = sources.into_iter().collect();
        sources.sort_by(|a, b| a.path.cmp(&b.path));

        let mut map = ClassificationMap::new();
        let mut stats = EngineStats {
            files: sources.len(),
            ..Default::default()
        };

        for source in &sources {
            let dir = SourceDir::containing(&source.path);
            tracing::debug!("processing {} (anchored at {})", source.path, dir);

            for (line, directive) in parse_text(&source.text) {
                stats.directives += 1;
                let resolution = resolve(&directive, &dir, &self.translator);
                stats.unencodable += resolution.unencodable;
                if resolution.over_limit {
                    tracing::warn!("{}:{}: pattern '{}' skipped", source.path, line, directive.path);
                    stats.over_limit += 1;
                }
                tracing::trace!(
                    "{}:{}: {} -> {:?}",
                    source.path,
                    line,
                    directive.path,
                    resolution.patterns
                );
                map.merge_all(resolution.patterns, directive.is_generated());
            }
        }

        (map, stats)
    }

    /// Classify all sources and compile the scopes.
    pub fn run<I>(&self, sources: I) -> Outcome
    where
        I: IntoIterator<Item = DirectiveSource>,
    {
        let (map, stats) = self.classify(sources);
        let scopes = Scopes::compile(&map);
        Outcome { map, scopes, stats }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
