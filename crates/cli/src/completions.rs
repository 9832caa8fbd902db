// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion script generation.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Binary name completions are registered for.
pub const BIN_NAME: &str = "genscope";

/// Write the completion script for `shell` to `out`.
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

/// Render the completion script for `shell` as a string.
pub fn completion_script(shell: Shell) -> String {
    let mut buf = Vec::new();
    write_completions(shell, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
#[path = "completions_tests.rs"]
mod tests;
