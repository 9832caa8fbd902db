// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command implementation.

use genscope::cli::{Cli, OutputFormat, ScanArgs};
use genscope::color::resolve_color;
use genscope::config;
use genscope::discovery;
use genscope::error::ExitCode;
use genscope::output::json::JsonFormatter;
use genscope::output::text::TextFormatter;
use genscope::scan::scan_project;

/// Run the scan command.
pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    if args.color && args.no_color {
        eprintln!("--color and --no-color cannot be used together");
        return Ok(ExitCode::ConfigError);
    }

    let cwd = std::env::current_dir()?;
    let root = match &args.path {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => cwd.join(path),
        None => cwd,
    };
    if !root.is_dir() {
        return Err(genscope::Error::Argument(format!(
            "not a directory: {}",
            root.display()
        ))
        .into());
    }

    let config_path = discovery::resolve_config(cli.config.as_deref(), &root)?;
    let mut config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            config::Config::default()
        }
    };
    if let Some(limit) = args.max_recursive_segments {
        config.scan.max_recursive_segments = limit;
    }

    tracing::trace!("scanning {}", root.display());
    let report = scan_project(&root, &config)?;
    tracing::debug!(
        "{} directive files, {} patterns",
        report.files.len(),
        report.classification.len()
    );

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(resolve_color(args.color, args.no_color));
            formatter.write_report(&report)?;
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout());
            formatter.write(&report)?;
        }
    }

    Ok(ExitCode::Success)
}
