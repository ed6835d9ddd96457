use crate::addon::AddonId;
use crate::package::PackageId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Session selection state: at most one package, any set of add-ons
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    chosen_package: Option<PackageId>,
    chosen_addons: BTreeSet<AddonId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn package(&self) -> Option<PackageId> {
        self.chosen_package
    }

    pub fn has_package(&self) -> bool {
        self.chosen_package.is_some()
    }

    /// Replaces any previously chosen package
    pub fn choose_package(&mut self, id: PackageId) {
        self.chosen_package = Some(id);
    }

    pub fn clear_package(&mut self) {
        self.chosen_package = None;
    }

    pub fn addons(&self) -> impl Iterator<Item = &AddonId> {
        self.chosen_addons.iter()
    }

    pub fn has_addon(&self, id: &AddonId) -> bool {
        self.chosen_addons.contains(id)
    }

    /// Add or remove an add-on; returns whether the set changed
    pub fn set_addon(&mut self, id: AddonId, selected: bool) -> bool {
        if selected {
            self.chosen_addons.insert(id)
        } else {
            self.chosen_addons.remove(&id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_replaced() {
        let mut selection = Selection::new();
        assert!(!selection.has_package());

        selection.choose_package(PackageId::Essential);
        selection.choose_package(PackageId::Enterprise);
        assert_eq!(selection.package(), Some(PackageId::Enterprise));

        selection.clear_package();
        assert_eq!(selection.package(), None);
    }

    #[test]
    fn test_addons_unique() {
        let mut selection = Selection::new();
        assert!(selection.set_addon(AddonId::from("a"), true));
        assert!(!selection.set_addon(AddonId::from("a"), true));
        assert_eq!(selection.addons().count(), 1);

        assert!(selection.set_addon(AddonId::from("a"), false));
        assert!(!selection.set_addon(AddonId::from("a"), false));
        assert!(!selection.has_addon(&AddonId::from("a")));
    }
}
