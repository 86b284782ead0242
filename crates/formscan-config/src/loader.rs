// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./formscan.toml` > `~/.config/formscan/formscan.toml` >
//! `/etc/formscan/formscan.toml`, with `FORMSCAN_` environment overrides on top.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::FormscanConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/formscan/formscan.toml";

/// Config file in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "formscan.toml";

/// User config file under the XDG config directory, if one can be resolved.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("formscan").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/formscan/formscan.toml`
/// 3. `~/.config/formscan/formscan.toml`
/// 4. `./formscan.toml`
/// 5. `FORMSCAN_*` environment variables
pub fn load_config() -> Result<FormscanConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<FormscanConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FormscanConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<FormscanConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FormscanConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The layered Figment before extraction, for callers that need metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(FormscanConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// `FORMSCAN_<SECTION>_<KEY>` maps to `<section>.<key>`.
///
/// Uses `Env::map()` rather than `Env::split("_")`: keys such as
/// `FORMSCAN_DEMO_FOOD_NEEDLE` must become `demo.food_needle`.
fn env_provider() -> Env {
    Env::prefixed("FORMSCAN_").map(|key| {
        // Figment hands over the key with its original case.
        let key_str = key.as_str().to_ascii_lowercase();
        let mapped = ["plugin", "log", "data", "demo"]
            .iter()
            .find_map(|section| {
                key_str
                    .strip_prefix(section)
                    .and_then(|rest| rest.strip_prefix('_'))
                    .map(|rest| format!("{section}.{rest}"))
            })
            .unwrap_or(key_str);
        mapped.into()
    })
}
