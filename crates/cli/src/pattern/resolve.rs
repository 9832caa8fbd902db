// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Anchoring translated fragments to the directory of their directive file.

use std::collections::BTreeSet;

use super::translate::Translator;
use crate::directive::Directive;

/// Project-root-relative directory of a directive file.
///
/// Empty for the project root, otherwise `/`-separated with a trailing `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceDir(String);

impl SourceDir {
    /// The project root.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Normalize a relative directory such as `pkg`, `pkg/` or `\pkg\gen`.
    pub fn new(dir: &str) -> Self {
        let dir = dir.replace('\\', "/");
        let dir = dir.trim_matches('/');
        if dir.is_empty() {
            Self::root()
        } else {
            Self(format!("{}/", dir))
        }
    }

    /// Directory containing a root-relative, `/`-separated file path.
    pub fn containing(file: &str) -> Self {
        let file = file.replace('\\', "/");
        match file.rsplit_once('/') {
            Some((dir, _)) => Self::new(dir),
            None => Self::root(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for SourceDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_root() {
            write!(f, "/")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Outcome of resolving one directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Root-relative scope patterns.
    pub patterns: BTreeSet<String>,
    /// Translations dropped because a segment was exactly `@`.
    pub unencodable: usize,
    /// Whether the translator refused to expand the fragment.
    pub over_limit: bool,
}

/// Translate a directive's fragment and anchor every variant to `dir`.
pub fn resolve(directive: &Directive, dir: &SourceDir, translator: &Translator) -> Resolution {
    let variants = translator.translate(&directive.path);
    let mut resolution = Resolution {
        over_limit: variants.is_empty(),
        ..Default::default()
    };

    for variant in &variants {
        match anchor(dir, variant) {
            Some(pattern) => {
                resolution.patterns.insert(pattern);
            }
            None => {
                tracing::warn!(
                    "dropping '{}{}': a path segment is exactly '@'",
                    dir.as_str(),
                    variant
                );
                resolution.unencodable += 1;
            }
        }
    }

    resolution
}

/// Prefix `variant` with `dir` and apply the `@` workaround.
pub fn anchor(dir: &SourceDir, variant: &str) -> Option<String> {
    let variant = if dir.as_str().ends_with('/') {
        variant.strip_prefix('/').unwrap_or(variant)
    } else {
        variant
    };
    encode_at_sign(&format!("{}{}", dir.as_str(), variant))
}

/// Replace `@` with `*`, which the scope dialect cannot express literally.
///
/// Returns `None` when a whole segment is `@`, since `*` would then match
/// every directory at that level.
pub fn encode_at_sign(path: &str) -> Option<String> {
    if path.split('/').any(|segment| segment == "@") {
        return None;
    }
    Some(path.replace('@', "*"))
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
