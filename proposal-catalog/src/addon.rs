use crate::package::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of an add-on control, declared by the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct AddonId(String);

impl AddonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AddonId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Billing cadence tag carried by an add-on control
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    #[default]
    Monthly,
    /// Billed per quarter, shown as its monthly equivalent
    Quarterly,
}

impl Cadence {
    /// Only an exact "quarterly" tag is pro-rated; any other tag bills monthly
    pub fn from_tag(tag: &str) -> Self {
        if tag == "quarterly" {
            Cadence::Quarterly
        } else {
            Cadence::Monthly
        }
    }
}

/// The two fields the total calculation consumes per add-on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddonTerms {
    pub price: i64,
    pub cadence: Cadence,
}

/// A declared add-on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Addon {
    pub id: AddonId,
    pub name: String,
    pub price: i64,
    pub cadence: Cadence,
}

impl Addon {
    pub fn new(id: impl Into<String>, name: &str, price: i64, cadence: Cadence) -> Self {
        Self {
            id: AddonId::new(id),
            name: name.to_string(),
            price,
            cadence,
        }
    }

    pub fn terms(&self) -> AddonTerms {
        AddonTerms {
            price: self.price,
            cadence: self.cadence,
        }
    }
}

/// Resolves add-on ids to their billing terms
pub trait AddonLookup: Send + Sync {
    /// `None` means the add-on cannot be resolved and is treated as not selected
    fn terms(&self, id: &AddonId) -> Option<AddonTerms>;
}

/// In-memory registry of the add-ons a page declares
#[derive(Debug, Clone, Default)]
pub struct AddonRegistry {
    addons: HashMap<AddonId, Addon>,
    order: Vec<AddonId>,
}

impl AddonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, addon: Addon) -> Result<(), CatalogError> {
        if self.addons.contains_key(&addon.id) {
            return Err(CatalogError::DuplicateAddon(addon.id.to_string()));
        }

        self.order.push(addon.id.clone());
        self.addons.insert(addon.id.clone(), addon);
        Ok(())
    }

    pub fn get(&self, id: &AddonId) -> Option<&Addon> {
        self.addons.get(id)
    }

    /// Add-ons in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Addon> {
        self.order.iter().filter_map(|id| self.addons.get(id))
    }

    pub fn len(&self) -> usize {
        self.addons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addons.is_empty()
    }
}

impl AddonLookup for AddonRegistry {
    fn terms(&self, id: &AddonId) -> Option<AddonTerms> {
        self.get(id).map(Addon::terms)
    }
}
