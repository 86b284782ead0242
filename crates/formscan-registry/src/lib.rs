// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Form registry, editor-id index, and registry scanner.
//!
//! The registry is built once during a load phase and is read-only
//! afterwards. All queries go through a [`Scanner`] borrowed from an
//! explicitly passed [`Registry`]; there is no process-wide instance.

pub mod loader;
pub mod matcher;
pub mod registry;
pub mod scanner;

pub use loader::{load_forms_file, parse_forms_json, parse_forms_toml};
pub use matcher::{contains_folded, NameFilter};
pub use registry::{Registry, RegistryBuilder};
pub use scanner::Scanner;
