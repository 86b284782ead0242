// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for formscan.
//!
//! This crate provides the form model shared by the registry and the plugin
//! harness: identifiers, kind tags, kind-specific payloads, checked
//! narrowing, and the error type.

pub mod error;
pub mod form;
pub mod narrow;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ScanError;
pub use form::{
    AlchemyItem, Armor, Book, Effect, Form, FormData, Ingredient, MagicEffect, Misc, Reference,
    Weapon,
};
pub use narrow::{FormVariant, Narrowed};
pub use types::{FormId, FormKind};
