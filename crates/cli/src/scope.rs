// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compilation of the classification map into scope expressions.
//!
//! A file is generated when it matches some generated pattern and no
//! non-generated pattern:
//!
//! ```text
//! generated     = Union(generated patterns) ∩ ¬Union(non-generated patterns)
//! non-generated = ¬generated
//! ```
//!
//! With no generated patterns the generated scope is empty and matches nothing.

use std::fmt;

use serde::Serialize;

use crate::classify::ClassificationMap;

/// Scope pattern matching every file in the project.
pub const ALL_FILES: &str = "*//*";

/// Boolean combination of scope patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PatternSet {
    /// Matches no file.
    Empty,
    /// A single scope pattern.
    Literal(String),
    /// Files matching any child.
    Union(Vec<PatternSet>),
    /// Files not matching the child.
    Complement(Box<PatternSet>),
    /// Files matching every child.
    Intersection(Vec<PatternSet>),
}

impl PatternSet {
    /// Union of literal patterns; empty input yields [`PatternSet::Empty`].
    pub fn union_of<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let children: Vec<_> = patterns
            .into_iter()
            .map(|p| PatternSet::Literal(p.into()))
            .collect();
        if children.is_empty() {
            PatternSet::Empty
        } else {
            PatternSet::Union(children)
        }
    }

    pub fn complement(self) -> Self {
        PatternSet::Complement(Box::new(self))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PatternSet::Empty)
    }

    /// Render in the host's scope syntax.
    pub fn to_scope_string(&self) -> String {
        self.to_string()
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternSet::Union(children) | PatternSet::Intersection(children)
                if children.len() > 1 =>
            {
                write!(f, "({})", self)
            }
            _ => write!(f, "{}", self),
        }
    }
}

impl fmt::Display for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternSet::Empty => Ok(()),
            PatternSet::Literal(pattern) => write!(f, "file:{}", pattern),
            PatternSet::Union(children) => write_joined(f, children, "||"),
            PatternSet::Intersection(children) => write_joined(f, children, "&&"),
            PatternSet::Complement(inner) => match inner.as_ref() {
                PatternSet::Empty => write!(f, "file:{}", ALL_FILES),
                PatternSet::Literal(_) => write!(f, "!{}", inner),
                _ => write!(f, "!({})", inner),
            },
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, children: &[PatternSet], op: &str) -> fmt::Result {
    for (idx, child) in children.iter().enumerate() {
        if idx > 0 {
            f.write_str(op)?;
        }
        child.fmt_operand(f)?;
    }
    Ok(())
}

/// Compile the generated scope from a classification map.
pub fn compile(map: &ClassificationMap) -> PatternSet {
    let generated = PatternSet::union_of(map.patterns(true));
    if generated.is_empty() {
        return PatternSet::Empty;
    }

    let non_generated = PatternSet::union_of(map.patterns(false));
    if non_generated.is_empty() {
        return generated;
    }

    PatternSet::Intersection(vec![generated, non_generated.complement()])
}

/// The generated scope and its complement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scopes {
    pub generated: PatternSet,
    pub non_generated: PatternSet,
}

impl Scopes {
    pub fn compile(map: &ClassificationMap) -> Self {
        let generated = compile(map);
        let non_generated = generated.clone().complement();
        Self {
            generated,
            non_generated,
        }
    }
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
