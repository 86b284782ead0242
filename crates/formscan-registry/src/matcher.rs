// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Case-folded substring matching for name filters.
//!
//! Folding is ASCII-only: `A-Z` map to `a-z` on both sides and every other
//! byte, including all non-ASCII text, must match exactly.

/// True if `haystack` contains `needle` after ASCII case folding both.
///
/// An empty needle matches every haystack.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

/// A reusable name filter built around [`contains_folded`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    needle: String,
}

impl NameFilter {
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
        }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, name: &str) -> bool {
        contains_folded(name, &self.needle)
    }
}
