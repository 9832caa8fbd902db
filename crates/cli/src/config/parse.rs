// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::path::Path;

use globset::Glob;

use crate::error::{Error, Result};

/// Check that every exclude pattern is a valid glob.
pub(super) fn validate_exclude_patterns(patterns: &[String], path: &Path) -> Result<()> {
    for pattern in patterns {
        Glob::new(pattern).map_err(|e| Error::Config {
            message: format!("invalid scan.exclude pattern '{}': {}", pattern, e),
            path: Some(path.to_path_buf()),
        })?;
    }
    Ok(())
}

/// Warn about keys of `table` not listed in `known`.
pub(super) fn warn_unknown_keys(path: &Path, prefix: &str, table: &toml::Table, known: &[&str]) {
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("{}{}", prefix, key));
        }
    }
}

pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "genscope: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}
