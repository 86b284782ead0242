// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The form model: a tagged record with a stable id, a display name, and a
//! kind-specific payload.
//!
//! A form's kind is never stored separately from its payload. [`Form::kind`]
//! reads the [`FormData`] variant, which keeps narrowing in
//! [`crate::narrow`] sound without any unchecked casts.

use serde::{Deserialize, Serialize};

use crate::types::{FormId, FormKind};

/// A single addressable record in the form registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    id: FormId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    editor_id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(flatten)]
    data: FormData,
}

/// Kind-specific payload of a form. The variant is the form's kind tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum FormData {
    Armor(Armor),
    Weapon(Weapon),
    AlchemyItem(AlchemyItem),
    Ingredient(Ingredient),
    Book(Book),
    Misc(Misc),
    MagicEffect(MagicEffect),
    Reference(Reference),
}

impl FormData {
    /// The kind tag of this payload.
    pub fn kind(&self) -> FormKind {
        match self {
            FormData::Armor(_) => FormKind::Armor,
            FormData::Weapon(_) => FormKind::Weapon,
            FormData::AlchemyItem(_) => FormKind::AlchemyItem,
            FormData::Ingredient(_) => FormKind::Ingredient,
            FormData::Book(_) => FormKind::Book,
            FormData::Misc(_) => FormKind::Misc,
            FormData::MagicEffect(_) => FormKind::MagicEffect,
            FormData::Reference(_) => FormKind::Reference,
        }
    }
}

/// Wearable armor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Armor {
    /// Gold value.
    #[serde(default)]
    pub value: u32,
    #[serde(default)]
    pub armor_rating: f32,
    #[serde(default)]
    pub weight: f32,
}

/// A weapon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Weapon {
    /// Gold value.
    #[serde(default)]
    pub value: u32,
    #[serde(default)]
    pub damage: u16,
    #[serde(default)]
    pub weight: f32,
}

/// A potion, poison, or food item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlchemyItem {
    /// Gold value.
    #[serde(default)]
    pub value: u32,
    /// Whether the item is consumed as food rather than drunk as a potion.
    #[serde(default)]
    pub food: bool,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

/// A raw alchemy ingredient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ingredient {
    #[serde(default)]
    pub value: u32,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    #[serde(default)]
    pub value: u32,
    /// Skill taught when read, if any.
    #[serde(default)]
    pub skill: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Misc {
    #[serde(default)]
    pub value: u32,
}

/// A magic effect definition referenced by alchemy items and ingredients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MagicEffect {
    #[serde(default)]
    pub school: Option<String>,
}

/// A placed object in the world, pointing back at its base object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Reference {
    pub base_object: FormId,
}

/// One effect entry of an alchemy item or ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Effect {
    /// The [`MagicEffect`] form this entry applies.
    pub base_effect: FormId,
    #[serde(default)]
    pub magnitude: f32,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: u32,
}

impl Form {
    pub fn new(id: u32, name: impl Into<String>, data: FormData) -> Self {
        Self {
            id: FormId(id),
            editor_id: None,
            name: name.into(),
            data,
        }
    }

    /// Attach an editor id (the symbolic name used by `lookup_by_name`).
    pub fn with_editor_id(mut self, editor_id: impl Into<String>) -> Self {
        self.editor_id = Some(editor_id.into());
        self
    }

    pub fn id(&self) -> FormId {
        self.id
    }

    pub fn editor_id(&self) -> Option<&str> {
        self.editor_id.as_deref()
    }

    /// Display name. May be empty and is not unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FormKind {
        self.data.kind()
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// Gold value for kinds that carry one.
    pub fn gold_value(&self) -> Option<u32> {
        match &self.data {
            FormData::Armor(a) => Some(a.value),
            FormData::Weapon(w) => Some(w.value),
            FormData::AlchemyItem(a) => Some(a.value),
            FormData::Ingredient(i) => Some(i.value),
            FormData::Book(b) => Some(b.value),
            FormData::Misc(m) => Some(m.value),
            FormData::MagicEffect(_) | FormData::Reference(_) => None,
        }
    }

    pub fn is_armor(&self) -> bool {
        self.kind() == FormKind::Armor
    }

    /// True for alchemy items flagged as food.
    pub fn is_food(&self) -> bool {
        matches!(&self.data, FormData::AlchemyItem(a) if a.food)
    }

    /// The placed-object payload, if this form is a reference.
    pub fn as_reference(&self) -> Option<&Reference> {
        match &self.data {
            FormData::Reference(r) => Some(r),
            _ => None,
        }
    }
}
