// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Example plugin harness for formscan.
//!
//! Sets up the file logger, registers a `DataLoaded` listener with the host,
//! and runs the demonstration queries against the registry snapshot the host
//! hands over.

pub mod demos;
pub mod host;
pub mod logging;
pub mod messaging;
pub mod plugin;

pub use demos::{on_forms_available, DemoReport};
pub use host::Host;
pub use logging::LogSetupError;
pub use messaging::{Message, MessageType, Messaging};
pub use plugin::Plugin;
