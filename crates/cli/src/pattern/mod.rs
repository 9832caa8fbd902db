// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Translation of gitignore-style globs into scope patterns.
//!
//! Scope patterns follow the host's file pattern dialect:
//! - `*` matches within one path segment
//! - a `//*` suffix matches everything below a directory
//! - there is no zero-or-more-directories wildcard, so `**/` is expanded
//!   into every zero-or-one-directory interpretation
//! - `@` cannot appear literally and is replaced by `*`

pub mod resolve;
pub mod translate;

pub use resolve::{Resolution, SourceDir, anchor, encode_at_sign, resolve};
pub use translate::{
    ALL_DESCENDANTS, DEFAULT_MAX_RECURSIVE_SEGMENTS, Translator, canonicalize, translate,
};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
