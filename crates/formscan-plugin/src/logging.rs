// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-based diagnostic log for the plugin.
//!
//! The log lives at `<directory>/<plugin name>.log`. Writes go straight to the
//! file, so every line is on disk once the macro call returns. A sink that
//! cannot be opened is reported as [`LogSetupError`]; callers treat that as
//! fatal.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use formscan_config::LogConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Why the log sink could not be set up.
#[derive(Debug, Error)]
pub enum LogSetupError {
    /// No directory was configured and no platform data directory exists.
    #[error("log directory not provided, logs disabled")]
    NoLogDirectory,

    #[error("cannot create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid log filter `{filter}`: {message}")]
    InvalidFilter { filter: String, message: String },

    /// A global subscriber is already installed.
    #[error("a global log subscriber is already installed: {0}")]
    AlreadyInstalled(String),
}

/// Resolve the log directory: the configured one, else the platform data dir.
pub fn log_directory(config: &LogConfig) -> Result<PathBuf, LogSetupError> {
    config
        .directory
        .clone()
        .or_else(|| dirs::data_local_dir().map(|d| d.join("formscan").join("logs")))
        .ok_or(LogSetupError::NoLogDirectory)
}

/// Create the log directory if needed and open `<plugin_name>.log` in it.
pub fn open_log_file(
    directory: &Path,
    plugin_name: &str,
    truncate: bool,
) -> Result<(PathBuf, File), LogSetupError> {
    std::fs::create_dir_all(directory).map_err(|source| LogSetupError::CreateDir {
        path: directory.to_path_buf(),
        source,
    })?;

    let path = directory.join(format!("{plugin_name}.log"));
    let mut options = OpenOptions::new();
    options.create(true);
    if truncate {
        options.write(true).truncate(true);
    } else {
        options.append(true);
    }
    let file = options.open(&path).map_err(|source| LogSetupError::OpenFile {
        path: path.clone(),
        source,
    })?;
    Ok((path, file))
}

/// Build the level filter. A valid `RUST_LOG` takes precedence over `level`.
pub fn build_filter(level: &str) -> Result<EnvFilter, LogSetupError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    select_filter(env.as_deref(), level).map(|(filter, _)| filter)
}

/// Pick the filter from an optional `RUST_LOG` value and the configured level.
///
/// An unparsable `RUST_LOG` falls back to `level`; the rejected value and
/// parse error come back alongside the filter so they can be logged.
pub fn select_filter(
    env: Option<&str>,
    level: &str,
) -> Result<(EnvFilter, Option<(String, String)>), LogSetupError> {
    let mut rejected = None;
    if let Some(directives) = env.filter(|d| !d.trim().is_empty()) {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return Ok((filter, None)),
            Err(e) => rejected = Some((directives.to_string(), e.to_string())),
        }
    }
    let filter = EnvFilter::try_new(level).map_err(|e| LogSetupError::InvalidFilter {
        filter: level.to_string(),
        message: e.to_string(),
    })?;
    Ok((filter, rejected))
}

/// Install the global file logger. Returns the log file path.
///
/// The previous run's log is only truncated once the subscriber is in
/// place, so a failed second install leaves the live log intact.
pub fn init(config: &LogConfig, plugin_name: &str) -> Result<PathBuf, LogSetupError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (filter, rejected) = select_filter(env.as_deref(), &config.level)?;

    let directory = log_directory(config)?;
    let (path, file) = open_log_file(&directory, plugin_name, false)?;
    let open_error = |source| LogSetupError::OpenFile {
        path: path.clone(),
        source,
    };
    let handle = file.try_clone().map_err(open_error)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_names(false)
        .try_init()
        .map_err(|e| LogSetupError::AlreadyInstalled(e.to_string()))?;

    if config.truncate {
        handle.set_len(0).map_err(open_error)?;
    }

    tracing::info!(path = %path.display(), level = %config.level, "logging initialized");
    if let Some((value, error)) = rejected {
        tracing::warn!(rust_log = %value, %error, "ignoring invalid RUST_LOG, using configured level");
    }
    Ok(path)
}
