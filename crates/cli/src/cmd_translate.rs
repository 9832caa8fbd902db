// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Translate command implementation.

use std::collections::{BTreeMap, BTreeSet};

use genscope::cli::{OutputFormat, TranslateArgs};
use genscope::color::resolve_color;
use genscope::directive::Directive;
use genscope::error::ExitCode;
use genscope::output::json::JsonFormatter;
use genscope::output::text::TextFormatter;
use genscope::pattern::{SourceDir, Translator, resolve};

/// Run the translate command.
pub fn run(args: &TranslateArgs) -> anyhow::Result<ExitCode> {
    let translator = Translator::new(args.max_recursive_segments);
    let dir = args.dir.as_deref().map(SourceDir::new);

    let mut translations: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for pattern in &args.patterns {
        let variants = match &dir {
            Some(dir) => {
                let directive = Directive {
                    path: pattern.clone(),
                    generated: true,
                    negated: false,
                };
                resolve(&directive, dir, &translator).patterns
            }
            None => translator.translate(pattern),
        };
        translations.insert(pattern.clone(), variants);
    }

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(resolve_color(false, false));
            for pattern in &args.patterns {
                let variants = translations.get(pattern).into_iter().flatten();
                formatter.write_translations(pattern, variants)?;
            }
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout());
            formatter.write_translations(&translations)?;
        }
    }

    Ok(ExitCode::Success)
}
