// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project scan: discovery, loading, and scope computation.

use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::classify::ClassificationMap;
use crate::config::Config;
use crate::discovery::{find_directive_files, relative_path};
use crate::engine::{DirectiveSource, Engine, EngineStats};
use crate::error::Result;
use crate::pattern::Translator;
use crate::reader::FileReader;
use crate::scope::PatternSet;

/// A named scope ready to be installed in the host.
#[derive(Debug, Clone, Serialize)]
pub struct ScopeReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Expression in the host's scope syntax.
    pub pattern: String,
    pub expression: PatternSet,
}

impl ScopeReport {
    fn new(name: &str, color: Option<&str>, expression: PatternSet) -> Self {
        Self {
            name: name.to_string(),
            color: color.filter(|c| !c.is_empty()).map(String::from),
            pattern: expression.to_scope_string(),
            expression,
        }
    }
}

/// Everything computed by a scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// RFC 3339 time of the scan.
    pub timestamp: String,
    /// Directive files that were read, relative to the project root.
    pub files: Vec<String>,
    /// Directive files that could not be read.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreadable: Vec<String>,
    pub stats: EngineStats,
    pub classification: ClassificationMap,
    pub generated: ScopeReport,
    pub non_generated: ScopeReport,
}

/// Read every directive file under `root` and compute both scopes.
pub fn scan_project(root: &Path, config: &Config) -> Result<ScanReport> {
    let paths = find_directive_files(root, &config.scan)?;
    let reader = FileReader::new();

    let mut sources = Vec::with_capacity(paths.len());
    let mut unreadable = Vec::new();
    for path in &paths {
        let relative = relative_path(root, path);
        match reader.read_text(path) {
            Ok(text) => sources.push(DirectiveSource::new(relative, text)),
            Err(e) => {
                tracing::warn!("skipping {}: {}", relative, e);
                unreadable.push(relative);
            }
        }
    }

    let files = sources.iter().map(|s| s.path.clone()).collect();
    let engine = Engine::new(Translator::new(config.scan.max_recursive_segments));
    let outcome = engine.run(sources);

    let scopes = &config.scopes;
    Ok(ScanReport {
        timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        files,
        unreadable,
        stats: outcome.stats,
        classification: outcome.map,
        generated: ScopeReport::new(
            &scopes.generated,
            scopes.color.as_deref(),
            outcome.scopes.generated,
        ),
        non_generated: ScopeReport::new(&scopes.non_generated, None, outcome.scopes.non_generated),
    })
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
