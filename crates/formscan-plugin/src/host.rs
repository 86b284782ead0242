// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process stand-in for the game host.
//!
//! The host owns the registry snapshot and the messaging interface. Plugins
//! never own the registry: they receive it through lifecycle messages or
//! borrow it through [`Host::registry`] once data has loaded.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use formscan_core::ScanError;
use formscan_registry::Registry;

use crate::messaging::{Message, MessageType, Messaging};

#[derive(Debug, Default)]
pub struct Host {
    registry: ArcSwapOption<Registry>,
    messaging: Messaging,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messaging(&self) -> &Messaging {
        &self.messaging
    }

    /// Broadcast `PostLoad` and `PostPostLoad` after plugins have registered.
    pub fn finish_plugin_load(&self) {
        self.messaging.dispatch(&Message::new(MessageType::PostLoad));
        self.messaging
            .dispatch(&Message::new(MessageType::PostPostLoad));
    }

    /// Install the first registry snapshot and broadcast `DataLoaded`.
    pub fn publish(&self, registry: Registry) -> Arc<Registry> {
        self.swap_and_dispatch(registry, MessageType::DataLoaded)
    }

    /// Replace the snapshot after a save load and broadcast `PostLoadGame`.
    pub fn reload(&self, registry: Registry) -> Arc<Registry> {
        self.swap_and_dispatch(registry, MessageType::PostLoadGame)
    }

    /// The current snapshot.
    ///
    /// Querying before the first `publish` is a precondition violation and
    /// yields [`ScanError::RegistryUnavailable`].
    pub fn registry(&self) -> Result<Arc<Registry>, ScanError> {
        self.registry.load_full().ok_or(ScanError::RegistryUnavailable)
    }

    pub fn is_data_loaded(&self) -> bool {
        self.registry.load().is_some()
    }

    fn swap_and_dispatch(&self, registry: Registry, kind: MessageType) -> Arc<Registry> {
        let snapshot = Arc::new(registry);
        self.registry.store(Some(Arc::clone(&snapshot)));
        tracing::info!(forms = snapshot.len(), message = %kind, "registry snapshot published");
        self.messaging
            .dispatch(&Message::with_registry(kind, Arc::clone(&snapshot)));
        snapshot
    }
}
