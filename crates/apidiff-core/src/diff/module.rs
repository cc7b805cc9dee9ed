//! Module differ: one named-set diff per entity kind.

use crate::config::DiffConfig;
use crate::diff::changes::ModuleChanges;
use crate::diff::named::diff_named;
use crate::equivalence::Equivalent;
use crate::model::ModuleSnapshot;

/// Diff two snapshots of the same module with the default configuration.
pub fn diff_module(earlier: &ModuleSnapshot, later: &ModuleSnapshot) -> ModuleChanges {
    diff_module_with(earlier, later, &DiffConfig::default())
}

/// Diff two snapshots of the same module.
///
/// Entities of each kind are matched by name; a name present in both is
/// unchanged when the definitions are equivalent up to type variable
/// renaming.
pub fn diff_module_with(
    earlier: &ModuleSnapshot,
    later: &ModuleSnapshot,
    config: &DiffConfig,
) -> ModuleChanges {
    let changes = ModuleChanges {
        unions: diff_named(&earlier.unions, &later.unions, |a, b| {
            a.is_equivalent(b, config)
        }),
        aliases: diff_named(&earlier.aliases, &later.aliases, |a, b| {
            a.is_equivalent(b, config)
        }),
        values: diff_named(&earlier.values, &later.values, |a, b| {
            a.is_equivalent(b, config)
        }),
        binops: diff_named(&earlier.binops, &later.binops, |a, b| {
            a.is_equivalent(b, config)
        }),
    };

    tracing::debug!(
        component = module_path!(),
        module = %earlier.name,
        severity = %changes.severity(),
        "module diffed"
    );

    changes
}
