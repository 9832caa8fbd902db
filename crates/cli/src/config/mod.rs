// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles genscope.toml parsing with version validation and unknown key warnings.

mod parse;

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pattern::DEFAULT_MAX_RECURSIVE_SEGMENTS;
use parse::{validate_exclude_patterns, warn_unknown_keys};

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "genscope.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Directive discovery and translation settings.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Names and color of the produced scopes.
    #[serde(default)]
    pub scopes: ScopesConfig,
}

/// `[scan]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Name of directive files (default: ".gitattributes").
    #[serde(default = "ScanConfig::default_directive_file")]
    pub directive_file: String,

    /// Globs skipped while looking for directive files.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Maximum `**/` segments expanded per pattern (default: 10).
    #[serde(default = "ScanConfig::default_max_recursive_segments")]
    pub max_recursive_segments: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            directive_file: Self::default_directive_file(),
            exclude: Vec::new(),
            max_recursive_segments: Self::default_max_recursive_segments(),
        }
    }
}

impl ScanConfig {
    pub(crate) fn default_directive_file() -> String {
        ".gitattributes".to_string()
    }

    fn default_max_recursive_segments() -> usize {
        DEFAULT_MAX_RECURSIVE_SEGMENTS
    }
}

/// `[scopes]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScopesConfig {
    /// Name of the generated scope.
    #[serde(default = "ScopesConfig::default_generated")]
    pub generated: String,

    /// Name of the non-generated scope.
    #[serde(default = "ScopesConfig::default_non_generated")]
    pub non_generated: String,

    /// File color for the generated scope, as hex RGB.
    #[serde(default = "ScopesConfig::default_color")]
    pub color: Option<String>,
}

impl Default for ScopesConfig {
    fn default() -> Self {
        Self {
            generated: Self::default_generated(),
            non_generated: Self::default_non_generated(),
            color: Self::default_color(),
        }
    }
}

impl ScopesConfig {
    fn default_generated() -> String {
        "linguist-generated-true".to_string()
    }

    fn default_non_generated() -> String {
        "linguist-generated-false".to_string()
    }

    fn default_color() -> Option<String> {
        Some("630330".to_string())
    }
}

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "scan", "scopes"];

/// Known `[scan]` keys.
const KNOWN_SCAN_KEYS: &[&str] = &["directive_file", "exclude", "max_recursive_segments"];

/// Known `[scopes]` keys.
const KNOWN_SCOPES_KEYS: &[&str] = &["generated", "non_generated", "color"];

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| config_error(e, path))?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade genscope to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let config: Config = toml::from_str(content).map_err(|e| config_error(e, path))?;
    validate(&config, path)?;
    Ok(config)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;

    if let Ok(toml::Value::Table(table)) = toml::from_str::<toml::Value>(content) {
        warn_unknown_keys(path, "", &table, KNOWN_KEYS);
        if let Some(toml::Value::Table(scan)) = table.get("scan") {
            warn_unknown_keys(path, "scan.", scan, KNOWN_SCAN_KEYS);
        }
        if let Some(toml::Value::Table(scopes)) = table.get("scopes") {
            warn_unknown_keys(path, "scopes.", scopes, KNOWN_SCOPES_KEYS);
        }
    }

    Ok(config)
}

fn validate(config: &Config, path: &Path) -> Result<()> {
    if config.scan.directive_file.is_empty() || config.scan.directive_file.contains('/') {
        return Err(Error::Config {
            message: format!(
                "scan.directive_file must be a file name, got '{}'",
                config.scan.directive_file
            ),
            path: Some(path.to_path_buf()),
        });
    }

    if config.scopes.generated == config.scopes.non_generated {
        return Err(Error::Config {
            message: format!(
                "scopes.generated and scopes.non_generated must differ (both '{}')",
                config.scopes.generated
            ),
            path: Some(path.to_path_buf()),
        });
    }

    validate_exclude_patterns(&config.scan.exclude, path)
}

fn config_error(err: toml::de::Error, path: &Path) -> Error {
    Error::Config {
        message: err.to_string(),
        path: Some(path.to_path_buf()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
