// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scope computation from `linguist-generated` attributes.
//!
//! Reads `.gitattributes` directive files, translates their gitignore-style
//! patterns into the host's scope pattern language, and compiles a
//! "generated" and a "non-generated" scope expression.

pub mod classify;
pub mod cli;
pub mod color;
pub mod completions;
pub mod config;
pub mod directive;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod output;
pub mod pattern;
pub mod reader;
pub mod scan;
pub mod scope;

pub use classify::{ClassificationMap, MergeOutcome};
pub use cli::{Cli, Command, OutputFormat, ScanArgs, TranslateArgs};
pub use config::Config;
pub use directive::{Directive, parse_line, parse_text};
pub use engine::{DirectiveSource, Engine, EngineStats, Outcome};
pub use error::{Error, ExitCode, Result};
pub use pattern::{SourceDir, Translator, translate};
pub use reader::FileReader;
pub use scan::{ScanReport, ScopeReport, scan_project};
pub use scope::{ALL_FILES, PatternSet, Scopes, compile};
