// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for formscan.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level formscan configuration.
///
/// Every section is optional and falls back to the values the example
/// plugin ships with.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FormscanConfig {
    /// Plugin identity.
    #[serde(default)]
    pub plugin: PluginConfig,

    /// Diagnostic log sink settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Where forms are loaded from when no host supplies them.
    #[serde(default)]
    pub data: DataConfig,

    /// Parameters of the demonstration queries run on data load.
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Plugin identity configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginConfig {
    /// Plugin name. Also names the log file (`<name>.log`).
    #[serde(default = "default_plugin_name")]
    pub name: String,

    #[serde(default = "default_plugin_version")]
    pub version: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            name: default_plugin_name(),
            version: default_plugin_version(),
        }
    }
}

fn default_plugin_name() -> String {
    "formscan".to_string()
}

fn default_plugin_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Log sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Log directory. `None` uses the platform data directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Minimum level written (trace, debug, info, warn, error, off).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Truncate the log file on startup instead of appending.
    #[serde(default = "default_truncate")]
    pub truncate: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: None,
            level: default_log_level(),
            truncate: default_truncate(),
        }
    }
}

fn default_log_level() -> String {
    "trace".to_string()
}

fn default_truncate() -> bool {
    true
}

/// Forms data source configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Path to a TOML or JSON forms file.
    #[serde(default)]
    pub forms_path: Option<PathBuf>,
}

/// Demonstration query parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// Form id looked up directly.
    #[serde(default = "default_sweetroll_id")]
    pub sweetroll_id: u32,

    /// Editor id looked up and narrowed to an alchemy item.
    #[serde(default = "default_sweetroll_editor_id")]
    pub sweetroll_editor_id: String,

    /// Substring searched for in food names.
    #[serde(default = "default_food_needle")]
    pub food_needle: String,

    /// Armor strictly above this gold value is reported.
    #[serde(default = "default_expensive_threshold")]
    pub expensive_threshold: u32,

    /// Substring searched for in the base-object names of references.
    #[serde(default = "default_reference_needle")]
    pub reference_needle: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sweetroll_id: default_sweetroll_id(),
            sweetroll_editor_id: default_sweetroll_editor_id(),
            food_needle: default_food_needle(),
            expensive_threshold: default_expensive_threshold(),
            reference_needle: default_reference_needle(),
        }
    }
}

fn default_sweetroll_id() -> u32 {
    0x64B3D
}

fn default_sweetroll_editor_id() -> String {
    "FoodSweetRoll".to_string()
}

fn default_food_needle() -> String {
    "soup".to_string()
}

fn default_expensive_threshold() -> u32 {
    5000
}

fn default_reference_needle() -> String {
    "hod".to_string()
}
