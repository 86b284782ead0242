// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only queries over a [`Registry`].
//!
//! Every query reports absence as `None` or an empty iterator. Scans are
//! lazy and walk the registry in insertion order.

use formscan_core::{Form, FormId, FormVariant, Narrowed, Reference};

use crate::registry::Registry;

/// Query handle over a borrowed registry.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'r> {
    registry: &'r Registry,
}

impl<'r> Scanner<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    pub fn registry(self) -> &'r Registry {
        self.registry
    }

    /// Direct id lookup.
    pub fn lookup_by_id(self, id: FormId) -> Option<&'r Form> {
        self.registry.get(id)
    }

    /// Lookup through the editor-id index.
    pub fn lookup_by_name(self, editor_id: &str) -> Option<&'r Form> {
        let id = self.registry.resolve(editor_id)?;
        self.registry.get(id)
    }

    /// Lookup through the editor-id index, then narrow to `T`.
    pub fn lookup_by_name_as<T: FormVariant>(self, editor_id: &str) -> Option<Narrowed<'r, T>> {
        self.lookup_by_name(editor_id)?.narrow::<T>()
    }

    /// Narrow a form to `T`; `None` if its kind tag differs.
    pub fn narrow<T: FormVariant>(self, form: &'r Form) -> Option<Narrowed<'r, T>> {
        form.narrow::<T>()
    }

    /// Every form of kind `T` for which `predicate` holds.
    pub fn scan_kind<T, P>(self, mut predicate: P) -> impl Iterator<Item = Narrowed<'r, T>>
    where
        T: FormVariant + 'r,
        P: FnMut(&Narrowed<'r, T>) -> bool,
    {
        self.registry
            .iter()
            .filter_map(Form::narrow::<T>)
            .filter(move |item| predicate(item))
    }

    /// Every form, of any kind, for which `predicate` holds.
    pub fn scan_all<P>(self, mut predicate: P) -> impl Iterator<Item = &'r Form>
    where
        P: FnMut(&Form) -> bool,
    {
        self.registry.iter().filter(move |form| predicate(*form))
    }

    /// Resolve a placed reference's base object.
    pub fn base_object(self, reference: &Reference) -> Option<&'r Form> {
        self.registry.get(reference.base_object)
    }
}

impl<'r> From<&'r Registry> for Scanner<'r> {
    fn from(registry: &'r Registry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::contains_folded;
    use formscan_core::{AlchemyItem, Armor, FormData, FormKind};

    fn scenario() -> Registry {
        Registry::try_from(vec![
            Form::new(
                0x64B3D,
                "Sweetroll",
                FormData::AlchemyItem(AlchemyItem {
                    value: 2,
                    food: true,
                    effects: vec![],
                }),
            )
            .with_editor_id("FoodSweetRoll"),
            Form::new(
                0x1,
                "Iron Shield",
                FormData::Armor(Armor {
                    value: 6000,
                    ..Armor::default()
                }),
            ),
            Form::new(
                0x2,
                "Rag",
                FormData::Armor(Armor {
                    value: 1,
                    ..Armor::default()
                }),
            ),
            Form::new(
                0xFF00_0001,
                "",
                FormData::Reference(Reference {
                    base_object: FormId(0x1),
                }),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_by_id_finds_present_form() {
        let registry = scenario();
        let scanner = Scanner::new(&registry);
        assert_eq!(scanner.lookup_by_id(FormId(0x64B3D)).unwrap().name(), "Sweetroll");
        assert!(scanner.lookup_by_id(FormId(0xDEAD)).is_none());
    }

    #[test]
    fn lookup_by_name_misses_unknown_names() {
        let registry = scenario();
        let scanner = Scanner::new(&registry);
        assert!(scanner.lookup_by_name("Nonexistent").is_none());
        assert_eq!(
            scanner.lookup_by_name("FoodSweetRoll").unwrap().id(),
            FormId(0x64B3D)
        );
    }

    #[test]
    fn lookup_by_name_as_narrows() {
        let registry = scenario();
        let scanner = Scanner::new(&registry);
        let roll = scanner
            .lookup_by_name_as::<AlchemyItem>("FoodSweetRoll")
            .unwrap();
        assert!(roll.food);
        assert!(scanner.lookup_by_name_as::<Armor>("FoodSweetRoll").is_none());
    }

    #[test]
    fn expensive_armor_scan_yields_only_iron_shield() {
        let registry = scenario();
        let scanner = Scanner::new(&registry);
        let hits: Vec<_> = scanner
            .scan_kind::<Armor, _>(|armor| armor.value > 5000)
            .map(|armor| (armor.id(), armor.name()))
            .collect();
        assert_eq!(hits, vec![(FormId(0x1), "Iron Shield")]);
    }

    #[test]
    fn scan_kind_is_repeatable() {
        let registry = scenario();
        let scanner = Scanner::new(&registry);
        let first: Vec<FormId> = scanner.scan_kind::<Armor, _>(|_| true).map(|a| a.id()).collect();
        let second: Vec<FormId> = scanner.scan_kind::<Armor, _>(|_| true).map(|a| a.id()).collect();
        assert_eq!(first, vec![FormId(0x1), FormId(0x2)]);
        assert_eq!(first, second);
    }

    #[test]
    fn scan_all_spans_kinds() {
        let registry = scenario();
        let scanner = Scanner::new(&registry);
        let valued: Vec<FormKind> = scanner
            .scan_all(|form| form.gold_value().is_some_and(|v| v >= 2))
            .map(Form::kind)
            .collect();
        assert_eq!(valued, vec![FormKind::AlchemyItem, FormKind::Armor]);
    }

    #[test]
    fn references_resolve_base_objects() {
        let registry = scenario();
        let scanner = Scanner::new(&registry);
        let names: Vec<&str> = scanner
            .scan_kind::<Reference, _>(|_| true)
            .filter_map(|r| scanner.base_object(&r))
            .filter(|base| contains_folded(base.name(), "shield"))
            .map(Form::name)
            .collect();
        assert_eq!(names, vec!["Iron Shield"]);
    }

    #[test]
    fn narrowing_food_to_armor_is_none() {
        let registry = scenario();
        let scanner = Scanner::new(&registry);
        let roll = scanner.lookup_by_id(FormId(0x64B3D)).unwrap();
        assert!(scanner.narrow::<Armor>(roll).is_none());
        assert!(scanner.narrow::<AlchemyItem>(roll).is_some());
    }
}
