//! Component name to variant table registry.

use std::collections::HashMap;

use tracing::debug;

use crate::error::RegistryError;
use crate::selection::Selection;
use crate::table::VariantTable;

/// Variant tables keyed by component name.
///
/// A registry is the unit a renderer is configured with: built-in tables
/// are registered once, and a user stylesheet can be layered on top with
/// [`extend`](Self::extend).
///
/// # Example
///
/// ```rust
/// use swatch_variants::{Selection, VariantRegistry, VariantTable};
///
/// let mut registry = VariantRegistry::new();
/// registry.add("card", VariantTable::new("rounded-xl border"));
///
/// let class = registry.resolve("card", &Selection::new(), "mt-4").unwrap();
/// assert_eq!(class, "rounded-xl border mt-4");
/// assert!(registry.resolve("modal", &Selection::new(), "").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantRegistry {
    tables: HashMap<String, VariantTable>,
}

impl VariantRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a table, replacing any table with the same name.
    pub fn add(&mut self, name: impl Into<String>, table: VariantTable) {
        self.tables.insert(name.into(), table);
    }

    /// Builder form of [`add`](Self::add).
    pub fn with(mut self, name: impl Into<String>, table: VariantTable) -> Self {
        self.add(name, table);
        self
    }

    /// Looks up a component's table.
    pub fn get(&self, name: &str) -> Result<&VariantTable, RegistryError> {
        self.tables
            .get(name)
            .ok_or_else(|| RegistryError::UnknownComponent {
                name: name.to_string(),
            })
    }

    /// Returns true if a table is registered under `name`.
    pub fn has(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Resolves a component's class string.
    pub fn resolve(
        &self,
        name: &str,
        selection: &Selection,
        class_override: &str,
    ) -> Result<String, RegistryError> {
        Ok(self.get(name)?.resolve(selection, class_override))
    }

    /// Layers `other` on top of this registry. Tables in `other` replace
    /// same-named tables wholesale.
    pub fn extend(&mut self, other: VariantRegistry) {
        for (name, table) in other.tables {
            if self.tables.insert(name.clone(), table).is_some() {
                debug!(component = %name, "stylesheet overrides component table");
            }
        }
    }

    /// Validates every table, reporting the first failure with its component name.
    ///
    /// Tables are checked in name order so the reported error is stable.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for name in self.names() {
            if let Some(table) = self.tables.get(name) {
                table.validate().map_err(|source| RegistryError::Invalid {
                    component: name.to_string(),
                    source,
                })?;
            }
        }
        Ok(())
    }

    /// Registered component names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if no tables are registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::VariantAxis;
    use crate::error::VariantError;

    fn sample() -> VariantRegistry {
        VariantRegistry::new()
            .with("card", VariantTable::new("rounded-xl border"))
            .with(
                "button",
                VariantTable::new("btn").axis(
                    VariantAxis::new("variant")
                        .value("default", "bg-a")
                        .value("ghost", "bg-transparent")
                        .default_value("default"),
                ),
            )
    }

    #[test]
    fn test_get_unknown_component() {
        let registry = sample();
        assert_eq!(
            registry.get("modal"),
            Err(RegistryError::UnknownComponent {
                name: "modal".to_string()
            })
        );
    }

    #[test]
    fn test_resolve_through_registry() {
        let registry = sample();
        let selection = Selection::new().with("variant", "ghost");
        assert_eq!(
            registry.resolve("button", &selection, "").unwrap(),
            "btn bg-transparent"
        );
    }

    #[test]
    fn test_extend_replaces_whole_table() {
        let mut registry = sample();
        registry.extend(VariantRegistry::new().with("button", VariantTable::new("brand-btn")));

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.resolve("button", &Selection::new(), "").unwrap(),
            "brand-btn"
        );
        assert!(registry.has("card"));
    }

    #[test]
    fn test_names_sorted() {
        assert_eq!(sample().names(), vec!["button", "card"]);
    }

    #[test]
    fn test_validate_names_component() {
        let registry = sample().with(
            "badge",
            VariantTable::new("badge").axis(VariantAxis::new("tone").value("warm", "bg-red-100")),
        );
        assert_eq!(
            registry.validate(),
            Err(RegistryError::Invalid {
                component: "badge".to_string(),
                source: VariantError::MissingDefault {
                    axis: "tone".to_string()
                },
            })
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = VariantRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.validate().is_ok());
    }
}
