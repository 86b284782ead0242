// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations.

use std::path::{Path, PathBuf};

use formscan_config::FormscanConfig;
use formscan_core::{Form, FormId, FormKind, ScanError};
use formscan_plugin::{logging, DemoReport, Host, LogSetupError, Plugin};
use formscan_registry::{load_forms_file, NameFilter, Registry, Scanner};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no forms file given: pass --forms or set data.forms_path")]
    NoFormsFile,

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Log(#[from] LogSetupError),
}

/// Filters accepted by `formscan scan`.
#[derive(Debug, Clone, Default)]
pub struct ScanFilter {
    pub kind: Option<FormKind>,
    pub name_contains: Option<String>,
    pub min_value: Option<u32>,
}

/// The forms file from the command line, else from config.
pub fn forms_path(cli: Option<&Path>, config: &FormscanConfig) -> Result<PathBuf, CliError> {
    cli.map(Path::to_path_buf)
        .or_else(|| config.data.forms_path.clone())
        .ok_or(CliError::NoFormsFile)
}

/// Install the file logger and tell the user where it writes.
pub fn start_logging(config: &FormscanConfig) -> Result<PathBuf, CliError> {
    let log_path = logging::init(&config.log, &config.plugin.name)?;
    eprintln!("formscan: logging to {}", log_path.display());
    Ok(log_path)
}

/// Full plugin lifecycle: logger, load phase, `DataLoaded`, report.
pub fn run(config: &FormscanConfig, forms: &Path) -> Result<DemoReport, CliError> {
    start_logging(config)?;

    let host = Host::new();
    let plugin = Plugin::load(&host, config.plugin.name.clone(), config.demo.clone());
    host.finish_plugin_load();

    let registry = load_forms_file(forms)?;
    host.publish(registry);

    let report = plugin.last_report().ok_or_else(|| {
        ScanError::Internal(format!("plugin {} did not run on data load", plugin.name()))
    })?;
    tracing::debug!(plugin = %plugin.name(), "lifecycle complete");
    Ok(report)
}

/// Render the report as the lines printed by `formscan run`.
pub fn render_report(report: &DemoReport) -> Vec<String> {
    let mut lines = Vec::new();
    match &report.form_by_id {
        Some(name) => lines.push(format!("form by id: {name}")),
        None => lines.push("form by id: not found".to_string()),
    }
    match &report.form_by_editor_id {
        Some(item) => {
            lines.push(format!("form by editor id: {} (food: {})", item.name, item.is_food));
            for effect in &item.effects {
                lines.push(format!("  effect {} of magnitude {}", effect.effect, effect.magnitude));
            }
        }
        None => lines.push("form by editor id: not found".to_string()),
    }
    lines.push(format!("foods: {}", report.foods.len()));
    lines.extend(report.foods.iter().map(|name| format!("  {name}")));
    lines.push(format!("expensive armor: {}", report.expensive_armor.len()));
    lines.extend(
        report
            .expensive_armor
            .iter()
            .map(|armor| format!("  {} {} ({} gold)", armor.id, armor.name, armor.value)),
    );
    lines.push(format!("references: {}", report.references.len()));
    lines.extend(
        report
            .references
            .iter()
            .map(|hit| format!("  {} -> {}", hit.id, hit.base_name)),
    );
    lines
}

/// Look a form up by id (decimal or `0x` hex), falling back to editor id.
pub fn lookup<'r>(registry: &'r Registry, target: &str) -> Option<&'r Form> {
    let scanner = Scanner::new(registry);
    let found = target
        .parse::<FormId>()
        .ok()
        .and_then(|id| scanner.lookup_by_id(id))
        .or_else(|| scanner.lookup_by_name(target));
    match found {
        Some(form) => tracing::info!(id = %form.id(), kind = %form.kind(), "Form Name: {}", form.name()),
        None => tracing::warn!(target_form = target, "no form matches"),
    }
    found
}

/// Every form matching all given filters, in registry order.
pub fn scan<'r>(registry: &'r Registry, filter: &ScanFilter) -> Vec<&'r Form> {
    let names = filter.name_contains.as_deref().map(NameFilter::new);
    Scanner::new(registry)
        .scan_all(|form| {
            filter.kind.is_none_or(|kind| form.kind() == kind)
                && names.as_ref().is_none_or(|n| n.matches(form.name()))
                && filter
                    .min_value
                    .is_none_or(|min| form.gold_value().is_some_and(|v| v >= min))
        })
        .inspect(|form| tracing::info!(id = %form.id(), kind = %form.kind(), "matched {}", form.name()))
        .collect()
}

/// One-line description of a form.
pub fn describe(form: &Form) -> String {
    let kind = form.kind().to_string();
    let mut line = format!("{} {kind:<12} {}", form.id(), form.name());
    if let Some(editor_id) = form.editor_id() {
        line.push_str(&format!(" [{editor_id}]"));
    }
    if let Some(value) = form.gold_value() {
        line.push_str(&format!(" ({value} gold)"));
    }
    if let Some(reference) = form.as_reference() {
        line.push_str(&format!(" -> {}", reference.base_object));
    }
    line
}
