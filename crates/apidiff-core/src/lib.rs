//! apidiff core - API diff engine for typed package interfaces
//!
//! Given two snapshots of a package's public interface, this crate computes
//! what was added, removed and changed, and classifies the result as a
//! semantic-versioning bump. It provides:
//! - Snapshot models for modules, unions, aliases, values and operators
//! - Type equivalence up to bijective renaming of type variables
//! - Module and package differs with deterministic, insertion-ordered output
//! - Severity classification and version bumping
//!
//! Snapshots are built by the caller; this crate does not read source files.

pub mod config;
pub mod diff;
pub mod equivalence;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod severity;
pub mod version;

// Re-export commonly used types
pub use config::DiffConfig;
pub use diff::{
    diff_module, diff_module_with, diff_package, diff_package_with, Change, Changes,
    ModuleChanges, PackageChanges,
};
pub use equivalence::{equivalent, equivalent_with, Equivalent};
pub use errors::{ApiDiffError, ExError, ExErrorKind, Result};
pub use model::{ModuleSnapshot, PackageSnapshot, Type};
pub use severity::Severity;
