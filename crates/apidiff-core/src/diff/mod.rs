//! Snapshot diffing
//!
//! A package diff partitions modules into added, removed and changed; a
//! module diff partitions each entity kind the same way. Unchanged entries
//! are never recorded, so an empty result means the public API is the same.

pub mod changes;
pub mod module;
pub mod named;
pub mod package;

pub use changes::{
    severity_of_module, severity_of_package, Change, Changes, ModuleChanges, PackageChanges,
};
pub use module::{diff_module, diff_module_with};
pub use named::diff_named;
pub use package::{diff_package, diff_package_with};
