//! # Registry Module
//!
//! Read-only lookups the extractors resolve names against: the registry of
//! known unit and currency instances, and the currency alias table that maps
//! catalog spellings ("fl.", "pounds") to canonical currency names.
//!
//! Both are built once and injected into the extractors; nothing here is
//! mutated during extraction.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical names of the unit instances seeded by [`Registry::with_defaults`]
pub const DEFAULT_UNITS: [&str; 3] = ["inches", "feet", "cm"];

lazy_static! {
    /// Catalog spellings of currencies and their canonical names (keys are case-sensitive)
    static ref CURRENCY_ALIASES: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("österreichische schilling", "at shillings");
        map.insert("florins", "de florins");
        map.insert("fl", "de florins");
        map.insert("fl.", "de florins");
        map.insert("pounds", "gb pounds");
        map.insert("livres", "fr livres");
        map.insert("guineas", "gb guineas");
        map.insert("reichsmark", "de reichsmarks");
        map
    };
}

/// Reference to a registered model instance (a unit or a currency)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceRef {
    pub name: String,
}

impl InstanceRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Lookup from canonical unit/currency names to instances
#[derive(Debug, Clone, Default)]
pub struct Registry {
    instances: HashMap<String, InstanceRef>,
}

impl Registry {
    /// An empty registry: every lookup misses
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the three dimension units and every canonical currency
    /// named by the static alias table
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catalog_facts::registry::Registry;
    ///
    /// let registry = Registry::with_defaults();
    /// assert!(registry.get("inches").is_some());
    /// assert!(registry.get("gb pounds").is_some());
    /// assert!(registry.get("pounds").is_none());
    /// ```
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for name in DEFAULT_UNITS {
            registry.insert(name);
        }
        for name in CURRENCY_ALIASES.values() {
            registry.insert(name);
        }
        registry
    }

    /// Add an instance under `name`
    pub fn with_instance(mut self, name: &str) -> Self {
        self.insert(name);
        self
    }

    fn insert(&mut self, name: &str) {
        self.instances
            .insert(name.to_string(), InstanceRef::new(name));
    }

    pub fn get(&self, name: &str) -> Option<&InstanceRef> {
        self.instances.get(name)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// Currency alias table: the static catalog spellings plus configured extras
#[derive(Debug, Clone)]
pub struct CurrencyAliases {
    aliases: HashMap<String, String>,
}

impl CurrencyAliases {
    /// Static table extended (or overridden) by `extra` `(alias, canonical)` pairs
    pub fn with_extra(extra: &[(String, String)]) -> Self {
        let mut aliases: HashMap<String, String> = CURRENCY_ALIASES
            .iter()
            .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
            .collect();
        for (alias, canonical) in extra {
            aliases.insert(alias.clone(), canonical.clone());
        }
        Self { aliases }
    }

    /// Canonical name for `text`, or `text` itself when it is not an alias
    pub fn resolve<'a>(&'a self, text: &'a str) -> &'a str {
        self.aliases.get(text).map(String::as_str).unwrap_or(text)
    }
}

impl Default for CurrencyAliases {
    fn default() -> Self {
        Self::with_extra(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contents() {
        let registry = Registry::with_defaults();

        assert_eq!(registry.len(), 9);
        for name in ["inches", "feet", "cm", "de florins", "at shillings", "de reichsmarks"] {
            assert_eq!(registry.get(name), Some(&InstanceRef::new(name)));
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.get("cm").is_none());

        let registry = registry.with_instance("nl guilders");
        assert!(registry.get("nl guilders").is_some());
    }

    #[test]
    fn test_alias_resolution() {
        let aliases = CurrencyAliases::default();

        assert_eq!(aliases.resolve("fl."), "de florins");
        assert_eq!(aliases.resolve("pounds"), "gb pounds");
        assert_eq!(aliases.resolve("österreichische schilling"), "at shillings");
        assert_eq!(aliases.resolve("ducats"), "ducats");
    }

    #[test]
    fn test_alias_lookup_is_case_sensitive() {
        let aliases = CurrencyAliases::default();
        assert_eq!(aliases.resolve("Pounds"), "Pounds");
        assert_eq!(aliases.resolve("FL"), "FL");
    }

    #[test]
    fn test_extra_aliases() {
        let aliases = CurrencyAliases::with_extra(&[
            ("gulden".to_string(), "nl guilders".to_string()),
            ("fl".to_string(), "nl guilders".to_string()),
        ]);
        assert_eq!(aliases.resolve("gulden"), "nl guilders");
        assert_eq!(aliases.resolve("fl"), "nl guilders");
        assert_eq!(aliases.resolve("fl."), "de florins");
    }
}
