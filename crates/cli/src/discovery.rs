// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config and directive file discovery.
//!
//! The config file is found by walking from the project root up to the git
//! root. Directive files are found by walking the project tree with the
//! `ignore` crate, honoring `.gitignore` and configured excludes.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

use crate::config::{CONFIG_FILE_NAME, ScanConfig};
use crate::error::{Error, Result};

/// Directories never searched for directive files.
pub(crate) const SKIP_DIRECTORIES: &[&str] = &["node_modules", ".git"];

/// Find genscope.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "GENSCOPE_CONFIG")
/// 2. Discovery from the project root up to git root
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, root: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => Ok(find_config(root)),
    }
}

/// Find every directive file under `root`, sorted by path.
pub fn find_directive_files(root: &Path, scan: &ScanConfig) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(true)
        .git_exclude(true)
        .git_global(false)
        .follow_links(false);

    // Overrides prefixed with `!` exclude matching paths.
    if !scan.exclude.is_empty() {
        let mut overrides = OverrideBuilder::new(root);
        for pattern in &scan.exclude {
            overrides
                .add(&format!("!{}", pattern))
                .map_err(|e| Error::Walk {
                    message: format!("invalid exclude pattern '{}': {}", pattern, e),
                })?;
        }
        let overrides = overrides.build().map_err(|e| Error::Walk {
            message: e.to_string(),
        })?;
        builder.overrides(overrides);
    }

    builder.filter_entry(|entry| {
        !entry.file_type().map(|t| t.is_dir()).unwrap_or(false)
            || !entry
                .file_name()
                .to_str()
                .map(|name| SKIP_DIRECTORIES.contains(&name))
                .unwrap_or(false)
    });

    let mut files = Vec::new();
    for entry in builder.build() {
        match entry {
            Ok(entry) => {
                let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
                if is_file && entry.file_name() == scan.directive_file.as_str() {
                    files.push(entry.into_path());
                }
            }
            Err(err) => {
                tracing::warn!("Walk error: {}", err);
            }
        }
    }

    files.sort();
    tracing::debug!("found {} directive files under {}", files.len(), root.display());
    Ok(files)
}

/// Path of `file` relative to `root`, `/`-separated.
pub fn relative_path(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
