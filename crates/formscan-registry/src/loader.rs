// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Forms file parsing.
//!
//! A forms file lists `[[form]]` tables (TOML) or a `{"form": [...]}`
//! object (JSON). Each entry carries `id`, optional `editor_id`, `name`,
//! `kind`, and the kind's own fields:
//!
//! ```toml
//! [[form]]
//! id = 0x64B3D
//! editor_id = "FoodSweetRoll"
//! name = "Sweetroll"
//! kind = "AlchemyItem"
//! value = 2
//! food = true
//! ```

use std::path::Path;

use formscan_core::{Form, ScanError};
use serde::Deserialize;

use crate::registry::Registry;

/// Top-level shape of a forms file.
#[derive(Debug, Deserialize)]
struct FormsFile {
    #[serde(default, rename = "form")]
    forms: Vec<Form>,
}

/// Parse forms from TOML content.
pub fn parse_forms_toml(content: &str) -> Result<Vec<Form>, ScanError> {
    let file: FormsFile = toml::from_str(content).map_err(|e| ScanError::Parse {
        path: "<toml>".to_string(),
        message: e.to_string(),
    })?;
    Ok(file.forms)
}

/// Parse forms from JSON content.
pub fn parse_forms_json(content: &str) -> Result<Vec<Form>, ScanError> {
    let file: FormsFile = serde_json::from_str(content).map_err(|e| ScanError::Parse {
        path: "<json>".to_string(),
        message: e.to_string(),
    })?;
    Ok(file.forms)
}

/// Read a forms file and build a registry from it.
///
/// Files ending in `.json` are parsed as JSON; anything else as TOML.
pub fn load_forms_file(path: &Path) -> Result<Registry, ScanError> {
    let shown = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| ScanError::Io {
        path: shown.clone(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed = if is_json {
        parse_forms_json(&content)
    } else {
        parse_forms_toml(&content)
    };
    let forms = parsed.map_err(|err| match err {
        ScanError::Parse { message, .. } => ScanError::Parse {
            path: shown.clone(),
            message,
        },
        other => other,
    })?;

    let registry = Registry::try_from(forms)?;
    tracing::info!(path = %shown, forms = registry.len(), "loaded forms file");
    Ok(registry)
}
