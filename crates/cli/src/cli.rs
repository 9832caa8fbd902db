// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Builds generated / non-generated file scopes from linguist-generated attributes
#[derive(Parser)]
#[command(name = "genscope")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "GENSCOPE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute scopes from every .gitattributes file in a project
    Scan(ScanArgs),
    /// Translate gitignore-style patterns into scope patterns
    Translate(TranslateArgs),
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Project root (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Maximum '**/' segments expanded per pattern (overrides config)
    #[arg(long, value_name = "N")]
    pub max_recursive_segments: Option<usize>,
}

#[derive(clap::Args)]
pub struct TranslateArgs {
    /// Patterns in .gitattributes syntax
    #[arg(value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,

    /// Directory the patterns are declared in, relative to the project root
    #[arg(long, value_name = "DIR")]
    pub dir: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Maximum '**/' segments expanded per pattern
    #[arg(long, value_name = "N", default_value_t = crate::pattern::DEFAULT_MAX_RECURSIVE_SEGMENTS)]
    pub max_recursive_segments: usize,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
