//! Package differ.

use std::time::Instant;

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::config::DiffConfig;
use crate::diff::changes::{ModuleChanges, PackageChanges};
use crate::diff::module::diff_module_with;
use crate::model::{ModuleSnapshot, PackageSnapshot};
use crate::{log_op_end, log_op_start};

/// Diff two package snapshots with the default configuration.
///
/// # Example
///
/// ```
/// use apidiff_core::diff::diff_package;
/// use apidiff_core::model::{ModuleSnapshot, PackageSnapshot};
/// use apidiff_core::Severity;
///
/// let earlier = PackageSnapshot::new();
/// let later = PackageSnapshot::new()
///     .with_module(ModuleSnapshot::new("C"))
///     .unwrap();
///
/// let changes = diff_package(&earlier, &later);
/// assert_eq!(changes.modules_added, vec!["C".to_string()]);
/// assert_eq!(changes.severity(), Severity::Minor);
/// ```
pub fn diff_package(earlier: &PackageSnapshot, later: &PackageSnapshot) -> PackageChanges {
    diff_package_with(earlier, later, &DiffConfig::default())
}

/// Diff two package snapshots.
///
/// Modules are matched by name. Modules present in both are diffed and kept
/// only when something changed. Results are ordered the same way whether or
/// not `config.parallel` is set.
pub fn diff_package_with(
    earlier: &PackageSnapshot,
    later: &PackageSnapshot,
    config: &DiffConfig,
) -> PackageChanges {
    let start = Instant::now();
    log_op_start!(
        "diff_package",
        modules_before = earlier.len() as u64,
        modules_after = later.len() as u64,
        parallel = config.parallel
    );

    let modules_added = later
        .modules
        .keys()
        .filter(|name| !earlier.modules.contains_key(*name))
        .cloned()
        .collect();

    let modules_removed = earlier
        .modules
        .keys()
        .filter(|name| !later.modules.contains_key(*name))
        .cloned()
        .collect();

    // package map keys, not `ModuleSnapshot::name`
    let common: Vec<(&String, &ModuleSnapshot, &ModuleSnapshot)> = earlier
        .modules
        .iter()
        .filter_map(|(name, old)| later.modules.get(name).map(|new| (name, old, new)))
        .collect();

    let diffed: Vec<(String, ModuleChanges)> = if config.parallel {
        common
            .par_iter()
            .map(|(name, old, new)| ((*name).clone(), diff_module_with(old, new, config)))
            .collect()
    } else {
        common
            .iter()
            .map(|(name, old, new)| ((*name).clone(), diff_module_with(old, new, config)))
            .collect()
    };

    let modules_changed: IndexMap<String, ModuleChanges> = diffed
        .into_iter()
        .filter(|(_, changes)| !changes.is_empty())
        .collect();

    let changes = PackageChanges {
        modules_added,
        modules_removed,
        modules_changed,
    };

    let duration_ms = start.elapsed().as_millis() as u64;
    log_op_end!(
        "diff_package",
        duration_ms = duration_ms,
        severity = %changes.severity(),
        modules_added = changes.modules_added.len() as u64,
        modules_removed = changes.modules_removed.len() as u64,
        modules_changed = changes.modules_changed.len() as u64
    );

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Type, Value};
    use crate::severity::Severity;

    fn module(name: &str, values: &[(&str, Type)]) -> ModuleSnapshot {
        let mut module = ModuleSnapshot::new(name);
        for (value, signature) in values {
            module.add_value(*value, Value::new(signature.clone())).unwrap();
        }
        module
    }

    fn package(modules: Vec<ModuleSnapshot>) -> PackageSnapshot {
        PackageSnapshot::from_modules(modules).unwrap()
    }

    fn int() -> Type {
        Type::named("Basics.Int", vec![])
    }

    #[test]
    fn test_empty_packages() {
        let changes = diff_package(&PackageSnapshot::new(), &PackageSnapshot::new());
        assert!(changes.is_empty());
        assert_eq!(changes.severity(), Severity::Patch);
    }

    #[test]
    fn test_module_sets() {
        let earlier = package(vec![module("A", &[]), module("B", &[]), module("D", &[])]);
        let later = package(vec![module("E", &[]), module("A", &[]), module("C", &[])]);

        let changes = diff_package(&earlier, &later);
        assert_eq!(changes.modules_added, vec!["E".to_string(), "C".to_string()]);
        assert_eq!(changes.modules_removed, vec!["B".to_string(), "D".to_string()]);
        assert!(changes.modules_changed.is_empty());
        assert_eq!(changes.severity(), Severity::Major);
    }

    #[test]
    fn test_unchanged_common_modules_are_dropped() {
        let earlier = package(vec![
            module("A", &[("f", int())]),
            module("B", &[("g", int())]),
        ]);
        let later = package(vec![
            module("A", &[("f", int())]),
            module("B", &[("g", Type::unit())]),
        ]);

        let changes = diff_package(&earlier, &later);
        let changed: Vec<&str> = changes.modules_changed.keys().map(String::as_str).collect();
        assert_eq!(changed, vec!["B"]);
    }

    #[test]
    fn test_changed_modules_keyed_by_package_key() {
        // two entries whose snapshots carry the same inner name
        let mislabelled = |values: &[(&str, Type)]| module("X", values);
        let mut earlier = PackageSnapshot::new();
        earlier
            .modules
            .insert("A".to_string(), mislabelled(&[("f", int())]));
        earlier
            .modules
            .insert("B".to_string(), mislabelled(&[("g", int())]));
        let mut later = PackageSnapshot::new();
        later.modules.insert("A".to_string(), mislabelled(&[]));
        later.modules.insert("B".to_string(), mislabelled(&[]));

        for config in [DiffConfig::new(), DiffConfig::new().with_parallel(true)] {
            let changes = diff_package_with(&earlier, &later, &config);
            let keys: Vec<&str> = changes.modules_changed.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["A", "B"]);
            assert!(changes.modules_changed["A"].values.removed.contains_key("f"));
            assert!(changes.modules_changed["B"].values.removed.contains_key("g"));
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let earlier = package(vec![
            module("Z", &[("f", int())]),
            module("Y", &[("f", int())]),
            module("X", &[("f", int())]),
        ]);
        let later = package(vec![
            module("X", &[("f", Type::unit())]),
            module("Y", &[("f", int()), ("g", int())]),
            module("Z", &[]),
        ]);

        let sequential = diff_package(&earlier, &later);
        let parallel = diff_package_with(&earlier, &later, &DiffConfig::new().with_parallel(true));
        assert_eq!(sequential, parallel);
        let order: Vec<&str> = parallel.modules_changed.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["Z", "Y", "X"]);
    }
}
