// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for formscan.
//!
//! A form that cannot be found is never an error: lookups return `Option`.
//! The variants here cover the load phase and precondition violations.

use thiserror::Error;

use crate::types::FormId;

/// The primary error type used across the registry and the plugin harness.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The registry was queried before the host published it.
    #[error("form registry is unavailable: data has not been loaded yet")]
    RegistryUnavailable,

    /// A form id was inserted twice during the load phase.
    #[error("duplicate form id {0}")]
    DuplicateFormId(FormId),

    /// An editor id was claimed by two forms during the load phase.
    #[error("duplicate editor id `{editor_id}` (already used by {existing})")]
    DuplicateEditorId { editor_id: String, existing: FormId },

    /// A string could not be parsed as a form id.
    #[error("invalid form id `{0}`")]
    InvalidFormId(String),

    /// Reading a forms file failed.
    #[error("i/o error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// A forms file was syntactically or structurally invalid.
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
