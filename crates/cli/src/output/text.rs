// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! <n> directive files, <n> directives, <n> patterns
//! <generated-scope-name> (#<color>)
//!   <scope expression>
//! <non-generated-scope-name>
//!   <scope expression>
//! warning: <n> patterns dropped ...
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::color::scheme;
use crate::scan::{ScanReport, ScopeReport};

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a complete scan report.
    pub fn write_report(&mut self, report: &ScanReport) -> std::io::Result<()> {
        writeln!(
            self.out,
            "{} directive {}, {} {}, {} {}",
            report.files.len(),
            plural(report.files.len(), "file", "files"),
            report.stats.directives,
            plural(report.stats.directives, "directive", "directives"),
            report.classification.len(),
            plural(report.classification.len(), "pattern", "patterns"),
        )?;

        self.write_scope(&report.generated)?;
        self.write_scope(&report.non_generated)?;

        if report.stats.unencodable > 0 {
            self.write_warning(&format!(
                "{} {} dropped: a path segment is exactly '@'",
                report.stats.unencodable,
                plural(report.stats.unencodable, "pattern", "patterns"),
            ))?;
        }
        if report.stats.over_limit > 0 {
            self.write_warning(&format!(
                "{} {} skipped: too many '**/' segments",
                report.stats.over_limit,
                plural(report.stats.over_limit, "directive", "directives"),
            ))?;
        }
        for path in &report.unreadable {
            self.write_warning(&format!("could not read {}", path))?;
        }

        Ok(())
    }

    /// Write one line per translated pattern.
    pub fn write_translations<'a>(
        &mut self,
        pattern: &str,
        translations: impl IntoIterator<Item = &'a String>,
    ) -> std::io::Result<()> {
        self.out.set_color(&scheme::scope_name())?;
        write!(self.out, "{}", pattern)?;
        self.out.reset()?;
        writeln!(self.out)?;

        let mut any = false;
        for translation in translations {
            any = true;
            self.out.set_color(&scheme::pattern())?;
            write!(self.out, "  {}", translation)?;
            self.out.reset()?;
            writeln!(self.out)?;
        }
        if !any {
            self.write_warning("no translation (too many '**/' segments)")?;
        }
        Ok(())
    }

    fn write_scope(&mut self, scope: &ScopeReport) -> std::io::Result<()> {
        self.out.set_color(&scheme::scope_name())?;
        write!(self.out, "{}", scope.name)?;
        self.out.reset()?;
        if let Some(color) = &scope.color {
            write!(self.out, " (#{})", color)?;
        }
        writeln!(self.out)?;

        if scope.expression.is_empty() {
            self.out.set_color(&scheme::empty())?;
            write!(self.out, "  (matches nothing)")?;
        } else {
            self.out.set_color(&scheme::pattern())?;
            write!(self.out, "  {}", scope.pattern)?;
        }
        self.out.reset()?;
        writeln!(self.out)
    }

    fn write_warning(&mut self, message: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::warn())?;
        write!(self.out, "warning")?;
        self.out.reset()?;
        writeln!(self.out, ": {}", message)
    }

    /// Consume the formatter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
