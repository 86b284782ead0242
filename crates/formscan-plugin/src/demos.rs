// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Demonstration queries run when data finishes loading.
//!
//! Each query logs its findings and returns them so callers can inspect
//! what was reported.

use formscan_config::DemoConfig;
use formscan_core::{AlchemyItem, Armor, FormId, MagicEffect};
use formscan_registry::{NameFilter, Registry, Scanner};

/// Effect line of the looked-up alchemy item.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectLine {
    /// Base effect name, or its id when the effect form is missing.
    pub effect: String,
    pub magnitude: f32,
}

/// Result of the editor-id lookup with narrowing.
#[derive(Debug, Clone, PartialEq)]
pub struct AlchemyReport {
    pub name: String,
    pub is_food: bool,
    pub effects: Vec<EffectLine>,
}

/// An armor piece above the price threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedForm {
    pub id: FormId,
    pub name: String,
    pub value: u32,
}

/// A placed reference whose base object matched the needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceHit {
    pub id: FormId,
    /// Base object name, lowercased as it was matched.
    pub base_name: String,
}

/// Everything the demonstration queries found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoReport {
    pub form_by_id: Option<String>,
    pub form_by_editor_id: Option<AlchemyReport>,
    pub foods: Vec<String>,
    pub expensive_armor: Vec<PricedForm>,
    pub references: Vec<ReferenceHit>,
}

/// Run all five queries in order.
pub fn on_forms_available(registry: &Registry, demo: &DemoConfig) -> DemoReport {
    let scanner = Scanner::new(registry);
    DemoReport {
        form_by_id: form_by_id(scanner, FormId(demo.sweetroll_id)),
        form_by_editor_id: form_by_editor_id(scanner, &demo.sweetroll_editor_id),
        foods: foods_named(scanner, &demo.food_needle),
        expensive_armor: expensive_armor(scanner, demo.expensive_threshold),
        references: references_by_base_name(scanner, &demo.reference_needle),
    }
}

/// Look up a form by id and log its name.
pub fn form_by_id(scanner: Scanner<'_>, id: FormId) -> Option<String> {
    let Some(form) = scanner.lookup_by_id(id) else {
        tracing::error!(%id, "no form with this id");
        return None;
    };
    tracing::info!("Form Name: {}", form.name());
    Some(form.name().to_string())
}

/// Look up a form by editor id as an alchemy item and log its effects.
pub fn form_by_editor_id(scanner: Scanner<'_>, editor_id: &str) -> Option<AlchemyReport> {
    let Some(item) = scanner.lookup_by_name_as::<AlchemyItem>(editor_id) else {
        tracing::error!("Could not get {} as an alchemy item!", editor_id);
        return None;
    };

    tracing::info!("Is {} a food? {}", item.name(), item.food);
    let effects = item
        .effects
        .iter()
        .map(|effect| {
            let name = scanner
                .lookup_by_id(effect.base_effect)
                .and_then(|form| form.narrow::<MagicEffect>())
                .map(|mgef| mgef.name().to_string())
                .unwrap_or_else(|| effect.base_effect.to_string());
            tracing::info!("Effect {} of magnitude {}", name, effect.magnitude);
            EffectLine {
                effect: name,
                magnitude: effect.magnitude,
            }
        })
        .collect();

    Some(AlchemyReport {
        name: item.name().to_string(),
        is_food: item.food,
        effects,
    })
}

/// Every food item whose name contains `needle`, ignoring case.
pub fn foods_named(scanner: Scanner<'_>, needle: &str) -> Vec<String> {
    let filter = NameFilter::new(needle);
    scanner
        .scan_kind::<AlchemyItem, _>(|item| item.food && filter.matches(item.name()))
        .map(|item| {
            let name = item.name().to_ascii_lowercase();
            tracing::info!("Yum, yum {}! {}", needle, name);
            name
        })
        .collect()
}

/// Every armor form worth more than `threshold` gold, found by a full scan.
pub fn expensive_armor(scanner: Scanner<'_>, threshold: u32) -> Vec<PricedForm> {
    scanner
        .scan_all(|form| form.is_armor() && form.gold_value().is_some_and(|v| v > threshold))
        .filter_map(|form| form.narrow::<Armor>())
        .map(|armor| {
            tracing::info!(
                "Whoa! {} is expensive! It costs {}",
                armor.name(),
                armor.value
            );
            PricedForm {
                id: armor.id(),
                name: armor.name().to_string(),
                value: armor.value,
            }
        })
        .collect()
}

/// Every placed reference whose base object's name contains `needle`.
pub fn references_by_base_name(scanner: Scanner<'_>, needle: &str) -> Vec<ReferenceHit> {
    let filter = NameFilter::new(needle);
    scanner
        .scan_all(|form| form.as_reference().is_some())
        .filter_map(|form| {
            let reference = form.as_reference()?;
            let Some(base) = scanner.base_object(reference) else {
                tracing::trace!(id = %form.id(), base = %reference.base_object, "reference has no base object");
                return None;
            };
            if !filter.matches(base.name()) {
                return None;
            }
            let base_name = base.name().to_ascii_lowercase();
            tracing::info!("{}-related reference: {} {:x}", needle, base_name, form.id());
            Some(ReferenceHit {
                id: form.id(),
                base_name,
            })
        })
        .collect()
}
