// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! genscope CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use genscope::cli::{Cli, Command};
use genscope::error::ExitCode;

mod cmd_scan;
mod cmd_translate;

fn init_logging() {
    let filter = EnvFilter::try_from_env("GENSCOPE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("genscope: {}", e);
            match e.downcast_ref::<genscope::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Scan(args)) => cmd_scan::run(&cli, args),
        Some(Command::Translate(args)) => cmd_translate::run(args),
        Some(Command::Completions(args)) => {
            genscope::completions::write_completions(args.shell, &mut std::io::stdout());
            Ok(ExitCode::Success)
        }
    }
}
