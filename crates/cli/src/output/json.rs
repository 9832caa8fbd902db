// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::io::Write;

use crate::scan::ScanReport;

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete scan report.
    pub fn write(&mut self, report: &ScanReport) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }

    /// Write pattern → translations as one JSON object.
    pub fn write_translations(
        &mut self,
        translations: &BTreeMap<String, BTreeSet<String>>,
    ) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(translations).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
