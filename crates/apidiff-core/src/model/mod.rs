//! Snapshot data model: type expressions, named entities, module and
//! package snapshots.

pub mod entity;
pub mod snapshot;
pub mod types;

pub use entity::{Alias, Associativity, Binop, Union, Value, Variant, MAX_PRECEDENCE};
pub use snapshot::{ModuleSnapshot, PackageSnapshot};
pub use types::Type;
