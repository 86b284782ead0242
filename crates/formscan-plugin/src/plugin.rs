// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin entry point: hooks the demonstration queries onto `DataLoaded`.

use std::sync::{Arc, Mutex, PoisonError};

use formscan_config::DemoConfig;

use crate::demos::{on_forms_available, DemoReport};
use crate::host::Host;
use crate::messaging::MessageType;

/// Handle to a loaded plugin.
#[derive(Debug, Clone)]
pub struct Plugin {
    name: String,
    last_report: Arc<Mutex<Option<DemoReport>>>,
}

impl Plugin {
    /// Register the plugin's `DataLoaded` listener with the host.
    ///
    /// Nothing is queried here; the registry is only touched once the host
    /// signals that data has loaded.
    pub fn load(host: &Host, name: impl Into<String>, demo: DemoConfig) -> Self {
        let plugin = Self {
            name: name.into(),
            last_report: Arc::new(Mutex::new(None)),
        };

        let sink = Arc::clone(&plugin.last_report);
        let plugin_name = plugin.name.clone();
        host.messaging().register_listener(move |message| {
            if message.kind() != MessageType::DataLoaded {
                return;
            }
            let Some(registry) = message.registry() else {
                tracing::error!(plugin = %plugin_name, "data loaded without a registry snapshot");
                return;
            };
            let report = on_forms_available(registry, &demo);
            *sink.lock().unwrap_or_else(PoisonError::into_inner) = Some(report);
        });

        tracing::info!(plugin = %plugin.name, "plugin loaded");
        plugin
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Findings of the most recent `DataLoaded` run, if any.
    pub fn last_report(&self) -> Option<DemoReport> {
        self.last_report
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
