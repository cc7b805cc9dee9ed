//! Diff result types.
//!
//! All collections are insertion-ordered (`IndexMap` / `Vec`) so the same
//! inputs always serialize to the same output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{Alias, Binop, Union, Value};
use crate::severity::Severity;

/// Earlier and later definitions of an entity that changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change<T> {
    pub old: T,
    pub new: T,
}

/// Partition of one name-keyed entity collection.
///
/// Unchanged entries are not recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Changes<T> {
    /// Present only in the later snapshot, in later order
    pub added: IndexMap<String, T>,
    /// Present in both but not equivalent, in earlier order
    pub changed: IndexMap<String, Change<T>>,
    /// Present only in the earlier snapshot, in earlier order
    pub removed: IndexMap<String, T>,
}

impl<T> Default for Changes<T> {
    fn default() -> Self {
        Self {
            added: IndexMap::new(),
            changed: IndexMap::new(),
            removed: IndexMap::new(),
        }
    }
}

impl<T> Changes<T> {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.changed.is_empty() && self.removed.is_empty()
    }

    /// Any removal or change is breaking; additions alone are minor.
    pub fn severity(&self) -> Severity {
        if !self.removed.is_empty() || !self.changed.is_empty() {
            Severity::Major
        } else if !self.added.is_empty() {
            Severity::Minor
        } else {
            Severity::Patch
        }
    }
}

/// Changes to one module present in both snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleChanges {
    pub unions: Changes<Union>,
    pub aliases: Changes<Alias>,
    pub values: Changes<Value>,
    pub binops: Changes<Binop>,
}

impl ModuleChanges {
    pub fn is_empty(&self) -> bool {
        self.unions.is_empty()
            && self.aliases.is_empty()
            && self.values.is_empty()
            && self.binops.is_empty()
    }

    /// Maximum severity over all entity kinds
    pub fn severity(&self) -> Severity {
        Severity::max_of([
            self.unions.severity(),
            self.aliases.severity(),
            self.values.severity(),
            self.binops.severity(),
        ])
    }
}

/// Changes between two package snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageChanges {
    /// Module names only in the later snapshot, in later order
    pub modules_added: Vec<String>,
    /// Module names only in the earlier snapshot, in earlier order
    pub modules_removed: Vec<String>,
    /// Non-empty diffs of modules present in both, in earlier order
    pub modules_changed: IndexMap<String, ModuleChanges>,
}

impl PackageChanges {
    pub fn is_empty(&self) -> bool {
        self.modules_added.is_empty()
            && self.modules_removed.is_empty()
            && self.modules_changed.is_empty()
    }

    /// Removed modules force Major, added modules at least Minor, combined
    /// with the severity of every changed module.
    pub fn severity(&self) -> Severity {
        let removed = if self.modules_removed.is_empty() {
            Severity::Patch
        } else {
            Severity::Major
        };
        let added = if self.modules_added.is_empty() {
            Severity::Patch
        } else {
            Severity::Minor
        };
        Severity::max_of(
            [removed, added]
                .into_iter()
                .chain(self.modules_changed.values().map(ModuleChanges::severity)),
        )
    }
}

/// Severity of a whole package diff
pub fn severity_of_package(changes: &PackageChanges) -> Severity {
    changes.severity()
}

/// Severity of one module diff
pub fn severity_of_module(changes: &ModuleChanges) -> Severity {
    changes.severity()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Type;

    fn value() -> Value {
        Value::new(Type::named("Basics.Int", vec![]))
    }

    #[test]
    fn test_empty_changes_are_patch() {
        let changes: Changes<Value> = Changes::default();
        assert!(changes.is_empty());
        assert_eq!(changes.severity(), Severity::Patch);
        assert_eq!(ModuleChanges::default().severity(), Severity::Patch);
        assert_eq!(PackageChanges::default().severity(), Severity::Patch);
    }

    #[test]
    fn test_additions_are_minor() {
        let mut changes: Changes<Value> = Changes::default();
        changes.added.insert("f".to_string(), value());
        assert_eq!(changes.severity(), Severity::Minor);
    }

    #[test]
    fn test_removal_dominates_addition() {
        let mut changes: Changes<Value> = Changes::default();
        changes.added.insert("f".to_string(), value());
        changes.removed.insert("g".to_string(), value());
        assert_eq!(changes.severity(), Severity::Major);
    }

    #[test]
    fn test_module_severity_takes_max_over_kinds() {
        let mut module = ModuleChanges::default();
        module.values.added.insert("f".to_string(), value());
        assert_eq!(module.severity(), Severity::Minor);
        module.values.changed.insert(
            "g".to_string(),
            Change {
                old: value(),
                new: Value::new(Type::unit()),
            },
        );
        assert_eq!(severity_of_module(&module), Severity::Major);
    }

    #[test]
    fn test_package_severity_from_module_sets() {
        let added = PackageChanges {
            modules_added: vec!["C".to_string()],
            ..PackageChanges::default()
        };
        assert_eq!(added.severity(), Severity::Minor);

        let removed = PackageChanges {
            modules_added: vec!["C".to_string()],
            modules_removed: vec!["B".to_string()],
            ..PackageChanges::default()
        };
        assert_eq!(severity_of_package(&removed), Severity::Major);
    }
}
