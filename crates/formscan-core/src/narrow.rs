// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Checked narrowing of a generic [`Form`] to a kind-specific view.
//!
//! Every narrowing goes through [`FormVariant::from_data`], which matches on
//! the payload variant. A mismatch yields `None`.

use std::ops::Deref;

use crate::form::{
    AlchemyItem, Armor, Book, Form, FormData, Ingredient, MagicEffect, Misc, Reference, Weapon,
};
use crate::types::{FormId, FormKind};

/// A payload type that a form can be narrowed to.
pub trait FormVariant: Sized {
    /// The kind tag a form must carry to narrow to `Self`.
    const KIND: FormKind;

    /// Borrow the payload if the variant matches.
    fn from_data(data: &FormData) -> Option<&Self>;
}

macro_rules! form_variant {
    ($($ty:ident),* $(,)?) => {
        $(
            impl FormVariant for $ty {
                const KIND: FormKind = FormKind::$ty;

                fn from_data(data: &FormData) -> Option<&Self> {
                    match data {
                        FormData::$ty(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

form_variant!(Armor, Weapon, AlchemyItem, Ingredient, Book, Misc, MagicEffect, Reference);

/// A form viewed as a specific kind.
///
/// Derefs to the payload; the parent form's identity stays reachable.
#[derive(Debug)]
pub struct Narrowed<'a, T> {
    form: &'a Form,
    data: &'a T,
}

impl<T> Clone for Narrowed<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Narrowed<'_, T> {}

impl<'a, T> Narrowed<'a, T> {
    pub fn form(&self) -> &'a Form {
        self.form
    }

    pub fn id(&self) -> FormId {
        self.form.id()
    }

    pub fn name(&self) -> &'a str {
        self.form.name()
    }

    pub fn editor_id(&self) -> Option<&'a str> {
        self.form.editor_id()
    }

    pub fn data(&self) -> &'a T {
        self.data
    }
}

impl<T> Deref for Narrowed<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.data
    }
}

impl Form {
    /// Narrow this form to `T`, or `None` if its kind tag is not `T::KIND`.
    pub fn narrow<T: FormVariant>(&self) -> Option<Narrowed<'_, T>> {
        T::from_data(self.data()).map(|data| Narrowed { form: self, data })
    }

    /// True if this form would narrow to `T`.
    pub fn is<T: FormVariant>(&self) -> bool {
        self.kind() == T::KIND
    }
}
