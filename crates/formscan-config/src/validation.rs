// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use tracing::level_filters::LevelFilter;

use crate::diagnostic::ConfigError;
use crate::model::FormscanConfig;

/// Characters that cannot appear in the plugin name, since it names the log file.
const FORBIDDEN_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every problem instead of stopping at the first.
pub fn validate_config(config: &FormscanConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut invalid = |message: String| errors.push(ConfigError::Validation { message });

    let name = config.plugin.name.trim();
    if name.is_empty() {
        invalid("plugin.name must not be empty".to_string());
    } else if name.contains(FORBIDDEN_NAME_CHARS) || name == "." || name == ".." {
        invalid(format!(
            "plugin.name `{name}` cannot be used as a log file name"
        ));
    }

    if config.plugin.version.trim().is_empty() {
        invalid("plugin.version must not be empty".to_string());
    }

    if config.log.level.parse::<LevelFilter>().is_err() {
        invalid(format!(
            "log.level `{}` is not one of trace, debug, info, warn, error, off",
            config.log.level
        ));
    }

    if let Some(dir) = &config.log.directory
        && dir.as_os_str().is_empty()
    {
        invalid("log.directory must not be empty when set".to_string());
    }

    if let Some(path) = &config.data.forms_path
        && path.as_os_str().is_empty()
    {
        invalid("data.forms_path must not be empty when set".to_string());
    }

    if config.demo.sweetroll_editor_id.trim().is_empty() {
        invalid("demo.sweetroll_editor_id must not be empty".to_string());
    }

    for (key, needle) in [
        ("demo.food_needle", &config.demo.food_needle),
        ("demo.reference_needle", &config.demo.reference_needle),
    ] {
        if needle.is_empty() {
            invalid(format!("{key} must not be empty"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
