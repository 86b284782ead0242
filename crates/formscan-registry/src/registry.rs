// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Form registry and its load-phase builder.
//!
//! The `RegistryBuilder` is append-only: forms are inserted while data loads,
//! then `build()` freezes them into a `Registry` that exposes no mutation.
//! Forms keep their insertion order, and the id and editor-id indexes store
//! slots into that order, so every indexed name resolves to a stored form.

use std::collections::HashMap;

use formscan_core::{Form, FormId, ScanError};

/// Immutable collection of forms keyed by id, with an editor-id index.
#[derive(Debug, Default)]
pub struct Registry {
    forms: Vec<Form>,
    by_id: HashMap<FormId, usize>,
    by_editor_id: HashMap<String, usize>,
}

impl Registry {
    /// Start a new load phase.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Get a form by id.
    pub fn get(&self, id: FormId) -> Option<&Form> {
        self.by_id.get(&id).map(|&slot| &self.forms[slot])
    }

    /// Resolve an editor id to its form id. Matching ignores ASCII case.
    pub fn resolve(&self, editor_id: &str) -> Option<FormId> {
        self.slot_for_editor_id(editor_id)
            .map(|slot| self.forms[slot].id())
    }

    /// Get a form by editor id. Matching ignores ASCII case.
    pub fn get_by_editor_id(&self, editor_id: &str) -> Option<&Form> {
        self.slot_for_editor_id(editor_id)
            .map(|slot| &self.forms[slot])
    }

    /// Iterate over all forms in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Form> {
        self.forms.iter()
    }

    /// Iterate over every editor id in the index, with the id it resolves to.
    pub fn editor_ids(&self) -> impl Iterator<Item = (&str, FormId)> + '_ {
        self.forms
            .iter()
            .filter_map(|form| form.editor_id().map(|name| (name, form.id())))
    }

    /// Returns the number of forms.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Returns true if no forms are loaded.
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    fn slot_for_editor_id(&self, editor_id: &str) -> Option<usize> {
        self.by_editor_id
            .get(&editor_id.to_ascii_lowercase())
            .copied()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Form;
    type IntoIter = std::slice::Iter<'a, Form>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Append-only builder used during the load phase.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    inner: Registry,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a form.
    ///
    /// Fails if the form id is already present, or if its editor id is
    /// already claimed (compared ignoring ASCII case). A rejected form leaves
    /// the builder unchanged.
    pub fn insert(&mut self, form: Form) -> Result<(), ScanError> {
        let id = form.id();
        if self.inner.by_id.contains_key(&id) {
            return Err(ScanError::DuplicateFormId(id));
        }

        let key = form.editor_id().map(str::to_ascii_lowercase);
        if let Some(key) = &key
            && let Some(&slot) = self.inner.by_editor_id.get(key)
        {
            return Err(ScanError::DuplicateEditorId {
                editor_id: form.editor_id().unwrap_or_default().to_string(),
                existing: self.inner.forms[slot].id(),
            });
        }

        let slot = self.inner.forms.len();
        self.inner.forms.push(form);
        self.inner.by_id.insert(id, slot);
        if let Some(key) = key {
            self.inner.by_editor_id.insert(key, slot);
        }
        Ok(())
    }

    /// Append every form, stopping at the first rejection.
    pub fn extend<I>(&mut self, forms: I) -> Result<(), ScanError>
    where
        I: IntoIterator<Item = Form>,
    {
        for form in forms {
            self.insert(form)?;
        }
        Ok(())
    }

    /// Returns the number of forms inserted so far.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Freeze the load phase.
    pub fn build(self) -> Registry {
        tracing::debug!(
            forms = self.inner.forms.len(),
            editor_ids = self.inner.by_editor_id.len(),
            "form registry built"
        );
        self.inner
    }
}

impl TryFrom<Vec<Form>> for Registry {
    type Error = ScanError;

    fn try_from(forms: Vec<Form>) -> Result<Self, Self::Error> {
        let mut builder = RegistryBuilder::new();
        builder.extend(forms)?;
        Ok(builder.build())
    }
}
