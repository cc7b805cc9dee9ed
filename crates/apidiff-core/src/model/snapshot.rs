use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::{ApiDiffError, Result};
use crate::model::entity::{Alias, Binop, Union, Value};

/// The public interface of one module at a point in time.
///
/// Each collection is keyed by entity name and keeps insertion order, which
/// is the order diff results are reported in. The `add_*` / `with_*`
/// constructors validate names and entity invariants; direct field access is
/// available to callers that already guarantee them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSnapshot {
    pub name: String,
    #[serde(default)]
    pub unions: IndexMap<String, Union>,
    #[serde(default)]
    pub aliases: IndexMap<String, Alias>,
    #[serde(default)]
    pub values: IndexMap<String, Value>,
    #[serde(default)]
    pub binops: IndexMap<String, Binop>,
}

fn insert_unique<T>(
    map: &mut IndexMap<String, T>,
    kind: &'static str,
    scope: &str,
    name: String,
    entity: T,
) -> Result<()> {
    match map.entry(name) {
        Entry::Occupied(slot) => Err(ApiDiffError::DuplicateName {
            kind,
            name: slot.key().clone(),
            scope: scope.to_string(),
        }),
        Entry::Vacant(slot) => {
            slot.insert(entity);
            Ok(())
        }
    }
}

impl ModuleSnapshot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unions: IndexMap::new(),
            aliases: IndexMap::new(),
            values: IndexMap::new(),
            binops: IndexMap::new(),
        }
    }

    /// # Errors
    /// * `DuplicateName` - a union with this name already exists
    /// * any error from [`Union::validate`]
    pub fn add_union(&mut self, name: impl Into<String>, union: Union) -> Result<()> {
        let name = name.into();
        union.validate(&name)?;
        insert_unique(&mut self.unions, "union", &self.name, name, union)
    }

    /// # Errors
    /// * `DuplicateName` - an alias with this name already exists
    /// * any error from [`Alias::validate`]
    pub fn add_alias(&mut self, name: impl Into<String>, alias: Alias) -> Result<()> {
        let name = name.into();
        alias.validate(&name)?;
        insert_unique(&mut self.aliases, "alias", &self.name, name, alias)
    }

    /// # Errors
    /// * `DuplicateName` - a value with this name already exists
    /// * `DuplicateField` - the signature repeats a record field
    pub fn add_value(&mut self, name: impl Into<String>, value: Value) -> Result<()> {
        let name = name.into();
        value.validate(&name)?;
        insert_unique(&mut self.values, "value", &self.name, name, value)
    }

    /// # Errors
    /// * `DuplicateName` - an operator with this name already exists
    /// * any error from [`Binop::validate`]
    pub fn add_binop(&mut self, name: impl Into<String>, binop: Binop) -> Result<()> {
        let name = name.into();
        binop.validate(&name)?;
        insert_unique(&mut self.binops, "binop", &self.name, name, binop)
    }

    /// Builder form of [`add_union`](Self::add_union)
    ///
    /// # Errors
    /// See [`add_union`](Self::add_union)
    pub fn with_union(mut self, name: impl Into<String>, union: Union) -> Result<Self> {
        self.add_union(name, union)?;
        Ok(self)
    }

    /// # Errors
    /// See [`add_alias`](Self::add_alias)
    pub fn with_alias(mut self, name: impl Into<String>, alias: Alias) -> Result<Self> {
        self.add_alias(name, alias)?;
        Ok(self)
    }

    /// # Errors
    /// See [`add_value`](Self::add_value)
    pub fn with_value(mut self, name: impl Into<String>, value: Value) -> Result<Self> {
        self.add_value(name, value)?;
        Ok(self)
    }

    /// # Errors
    /// See [`add_binop`](Self::add_binop)
    pub fn with_binop(mut self, name: impl Into<String>, binop: Binop) -> Result<Self> {
        self.add_binop(name, binop)?;
        Ok(self)
    }

    /// Re-check entity invariants, e.g. after deserialization.
    ///
    /// # Errors
    /// The first invariant violation found, in union, alias, value, binop order
    pub fn validate(&self) -> Result<()> {
        for (name, union) in &self.unions {
            union.validate(name)?;
        }
        for (name, alias) in &self.aliases {
            alias.validate(name)?;
        }
        for (name, value) in &self.values {
            value.validate(name)?;
        }
        for (name, binop) in &self.binops {
            binop.validate(name)?;
        }
        Ok(())
    }

    /// Total number of exported entities
    pub fn len(&self) -> usize {
        self.unions.len() + self.aliases.len() + self.values.len() + self.binops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The public interface of a whole package: its exposed modules, keyed by
/// module name in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageSnapshot {
    #[serde(default)]
    pub modules: IndexMap<String, ModuleSnapshot>,
}

impl PackageSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a package from modules, rejecting duplicate module names.
    ///
    /// # Errors
    /// * `DuplicateName` - two modules share a name
    pub fn from_modules<I>(modules: I) -> Result<Self>
    where
        I: IntoIterator<Item = ModuleSnapshot>,
    {
        let mut package = Self::new();
        for module in modules {
            package.add_module(module)?;
        }
        Ok(package)
    }

    /// # Errors
    /// * `DuplicateName` - a module with the same name already exists
    pub fn add_module(&mut self, module: ModuleSnapshot) -> Result<()> {
        let name = module.name.clone();
        insert_unique(&mut self.modules, "module", "package", name, module)
    }

    /// # Errors
    /// See [`add_module`](Self::add_module)
    pub fn with_module(mut self, module: ModuleSnapshot) -> Result<Self> {
        self.add_module(module)?;
        Ok(self)
    }

    pub fn module(&self, name: &str) -> Option<&ModuleSnapshot> {
        self.modules.get(name)
    }

    /// Module names in insertion order
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// Re-check every module, e.g. after deserialization.
    ///
    /// # Errors
    /// * `ModuleNameMismatch` - a map key differs from its module's `name`
    /// * any error from [`ModuleSnapshot::validate`]
    ///
    /// The first violation found, in module order
    pub fn validate(&self) -> Result<()> {
        for (key, module) in &self.modules {
            if *key != module.name {
                return Err(ApiDiffError::ModuleNameMismatch {
                    key: key.clone(),
                    name: module.name.clone(),
                });
            }
            module.validate()?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
