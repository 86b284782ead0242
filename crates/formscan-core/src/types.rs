// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identifier and kind-tag types shared across formscan.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::ScanError;

/// Stable 32-bit identifier of a form, unique across the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(pub u32);

impl FormId {
    /// Returns the raw numeric id.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for FormId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

impl fmt::LowerHex for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl FromStr for FormId {
    type Err = ScanError;

    /// Accepts decimal (`412477`) or `0x`-prefixed hex (`0x64B3D`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => trimmed.parse::<u32>(),
        };
        parsed
            .map(FormId)
            .map_err(|_| ScanError::InvalidFormId(s.to_string()))
    }
}

/// Kind tag carried by every form.
///
/// The tag is derived from the form's payload variant, so it cannot drift
/// from the data it describes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum FormKind {
    Armor,
    Weapon,
    AlchemyItem,
    Ingredient,
    Book,
    Misc,
    MagicEffect,
    Reference,
}
