//! Type equivalence up to consistent renaming of type variables.
//!
//! Two type expressions are the same API commitment when one can be turned
//! into the other by a bijective renaming of its type variables. The
//! renaming is discovered greedily during a parallel walk of both trees and
//! lives in a [`Renaming`] owned by a single top-level comparison.
//!
//! ```
//! use apidiff_core::equivalence::equivalent;
//! use apidiff_core::model::Type;
//!
//! let earlier = Type::lambda(Type::var("a"), Type::var("a"));
//! let later = Type::lambda(Type::var("x"), Type::var("x"));
//! assert!(equivalent(&earlier, &later));
//!
//! let split = Type::lambda(Type::var("x"), Type::var("y"));
//! assert!(!equivalent(&earlier, &split));
//! ```

use std::collections::{BTreeMap, HashMap};

use crate::config::DiffConfig;
use crate::model::{Alias, Binop, Type, Union, Value};

/// Constraint class of a type variable, decided by its name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarCategory {
    Number,
    Comparable,
    Appendable,
    CompAppend,
    Unconstrained,
}

impl VarCategory {
    pub fn of(name: &str) -> Self {
        if name.starts_with("number") {
            VarCategory::Number
        } else if name.starts_with("comparable") {
            VarCategory::Comparable
        } else if name.starts_with("appendable") {
            VarCategory::Appendable
        } else if name.starts_with("compappend") {
            VarCategory::CompAppend
        } else {
            VarCategory::Unconstrained
        }
    }

    /// Whether an earlier variable of category `self` may be renamed to a
    /// later variable of category `later` without breaking callers.
    pub fn accepts(self, later: VarCategory) -> bool {
        self == later
            || later == VarCategory::Unconstrained
            || (self == VarCategory::Number && later == VarCategory::Comparable)
    }
}

/// Directional pairing of earlier variable names to later ones.
///
/// Invariant: `forward` and `backward` are inverse maps, so the pairing is
/// always a bijection between the names seen so far.
#[derive(Debug, Clone, Default)]
pub struct Renaming {
    forward: HashMap<String, String>,
    backward: HashMap<String, String>,
    constrained: bool,
}

impl Renaming {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_config(config: &DiffConfig) -> Self {
        Self {
            constrained: config.constrained_type_vars,
            ..Self::default()
        }
    }

    /// Pair `old` with `new`.
    ///
    /// Returns `false` when the pair contradicts an existing pairing on
    /// either side, or when category checking is on and the categories are
    /// incompatible. A rejected pair is not recorded.
    pub fn bind(&mut self, old: &str, new: &str) -> bool {
        match (self.forward.get(old), self.backward.get(new)) {
            (Some(mapped), _) => mapped == new,
            (None, Some(_)) => false,
            (None, None) => {
                if self.constrained && !VarCategory::of(old).accepts(VarCategory::of(new)) {
                    return false;
                }
                self.forward.insert(old.to_string(), new.to_string());
                self.backward.insert(new.to_string(), old.to_string());
                true
            }
        }
    }

    /// Bind declared parameters positionally; callers check the counts.
    pub fn seed(&mut self, old_params: &[String], new_params: &[String]) -> bool {
        old_params
            .iter()
            .zip(new_params)
            .all(|(old, new)| self.bind(old, new))
    }

    /// The later name `old` is paired with, if any
    pub fn get(&self, old: &str) -> Option<&str> {
        self.forward.get(old).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Equivalence under the default configuration.
pub fn equivalent(earlier: &Type, later: &Type) -> bool {
    equivalent_with(earlier, later, &DiffConfig::default())
}

pub fn equivalent_with(earlier: &Type, later: &Type, config: &DiffConfig) -> bool {
    let mut renaming = Renaming::for_config(config);
    types_match(earlier, later, &mut renaming)
}

/// Walk both types in parallel, extending `renaming` as variables are met.
///
/// Record fields are visited in sorted name order. On a `false` result the
/// renaming may hold pairs from the part already visited.
pub fn types_match(old: &Type, new: &Type, renaming: &mut Renaming) -> bool {
    match (old, new) {
        (Type::Var { name: a }, Type::Var { name: b }) => renaming.bind(a, b),
        (
            Type::Lambda {
                input: old_in,
                output: old_out,
            },
            Type::Lambda {
                input: new_in,
                output: new_out,
            },
        ) => types_match(old_in, new_in, renaming) && types_match(old_out, new_out, renaming),
        (Type::Tuple { items: a }, Type::Tuple { items: b }) => all_match(a, b, renaming),
        (
            Type::Named {
                name: old_name,
                args: old_args,
            },
            Type::Named {
                name: new_name,
                args: new_args,
            },
        ) => old_name == new_name && all_match(old_args, new_args, renaming),
        (
            Type::Record {
                fields: old_fields,
                ext: old_ext,
            },
            Type::Record {
                fields: new_fields,
                ext: new_ext,
            },
        ) => {
            let ext_ok = match (old_ext, new_ext) {
                (None, None) => true,
                (Some(a), Some(b)) => renaming.bind(a, b),
                _ => false,
            };
            ext_ok && fields_match(old_fields, new_fields, renaming)
        }
        _ => false,
    }
}

fn all_match(old: &[Type], new: &[Type], renaming: &mut Renaming) -> bool {
    old.len() == new.len()
        && old
            .iter()
            .zip(new)
            .all(|(a, b)| types_match(a, b, renaming))
}

fn fields_match(old: &[(String, Type)], new: &[(String, Type)], renaming: &mut Renaming) -> bool {
    let old_by_name: BTreeMap<&str, &Type> = old.iter().map(|(n, t)| (n.as_str(), t)).collect();
    let new_by_name: BTreeMap<&str, &Type> = new.iter().map(|(n, t)| (n.as_str(), t)).collect();
    if old_by_name.len() != new_by_name.len() {
        return false;
    }
    old_by_name.iter().all(|(name, old_type)| {
        new_by_name
            .get(name)
            .is_some_and(|new_type| types_match(old_type, new_type, renaming))
    })
}

/// Entity-level "unchanged" predicate used by the set differ.
pub trait Equivalent {
    fn is_equivalent(&self, later: &Self, config: &DiffConfig) -> bool;
}

impl Equivalent for Value {
    fn is_equivalent(&self, later: &Self, config: &DiffConfig) -> bool {
        equivalent_with(&self.signature, &later.signature, config)
    }
}

impl Equivalent for Alias {
    fn is_equivalent(&self, later: &Self, config: &DiffConfig) -> bool {
        if self.params.len() != later.params.len() {
            return false;
        }
        let mut renaming = Renaming::for_config(config);
        renaming.seed(&self.params, &later.params)
            && types_match(&self.body, &later.body, &mut renaming)
    }
}

impl Equivalent for Union {
    fn is_equivalent(&self, later: &Self, config: &DiffConfig) -> bool {
        if self.params.len() != later.params.len() || self.variants.len() != later.variants.len()
        {
            return false;
        }
        let mut renaming = Renaming::for_config(config);
        if !renaming.seed(&self.params, &later.params) {
            return false;
        }
        // variant names are unique, so equal counts plus every earlier name
        // present later means equal name sets
        self.variants.iter().all(|old| match later.variant(&old.name) {
            Some(new) => all_match(&old.args, &new.args, &mut renaming),
            None => false,
        })
    }
}

impl Equivalent for Binop {
    fn is_equivalent(&self, later: &Self, config: &DiffConfig) -> bool {
        self.associativity == later.associativity
            && self.precedence == later.precedence
            && equivalent_with(&self.signature, &later.signature, config)
    }
}
