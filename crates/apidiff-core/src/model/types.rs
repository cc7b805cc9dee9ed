use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::errors::{ApiDiffError, Result};

/// A fully-resolved type expression as it appears in a public signature.
///
/// The tree is finite and acyclic. Record fields keep their declared order,
/// but field order carries no meaning: comparisons treat fields as a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    /// Universally quantified type variable
    Var { name: String },
    /// Function arrow `input -> output`
    Lambda { input: Box<Type>, output: Box<Type> },
    /// Tuple; the empty tuple is unit
    Tuple { items: Vec<Type> },
    /// Qualified type constructor applied to arguments, e.g. `Maybe.Maybe a`
    Named { name: String, args: Vec<Type> },
    /// Record; `ext = Some(var)` makes it extensible (`{ r | x : Int }`)
    Record {
        fields: Vec<(String, Type)>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ext: Option<String>,
    },
}

impl Type {
    pub fn var(name: impl Into<String>) -> Self {
        Type::Var { name: name.into() }
    }

    pub fn lambda(input: Type, output: Type) -> Self {
        Type::Lambda {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Right-nested arrow over `args`, ending in `result`.
    ///
    /// `Type::function(vec![a, b], c)` is `a -> b -> c`.
    pub fn function(args: Vec<Type>, result: Type) -> Self {
        args.into_iter()
            .rev()
            .fold(result, |acc, arg| Type::lambda(arg, acc))
    }

    pub fn unit() -> Self {
        Type::Tuple { items: Vec::new() }
    }

    pub fn tuple(items: Vec<Type>) -> Self {
        Type::Tuple { items }
    }

    pub fn named(name: impl Into<String>, args: Vec<Type>) -> Self {
        Type::Named {
            name: name.into(),
            args,
        }
    }

    pub fn record<N: Into<String>>(fields: Vec<(N, Type)>) -> Self {
        Type::Record {
            fields: fields.into_iter().map(|(n, t)| (n.into(), t)).collect(),
            ext: None,
        }
    }

    pub fn extensible<N: Into<String>>(ext: impl Into<String>, fields: Vec<(N, Type)>) -> Self {
        Type::Record {
            fields: fields.into_iter().map(|(n, t)| (n.into(), t)).collect(),
            ext: Some(ext.into()),
        }
    }

    /// Type variables in first-occurrence order (left to right, record
    /// fields in declared order, extension variable before fields).
    pub fn vars(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        self.collect_vars(&mut seen, &mut out);
        out
    }

    fn collect_vars(&self, seen: &mut BTreeSet<String>, out: &mut Vec<String>) {
        fn push(name: &str, seen: &mut BTreeSet<String>, out: &mut Vec<String>) {
            if seen.insert(name.to_string()) {
                out.push(name.to_string());
            }
        }
        match self {
            Type::Var { name } => push(name, seen, out),
            Type::Lambda { input, output } => {
                input.collect_vars(seen, out);
                output.collect_vars(seen, out);
            }
            Type::Tuple { items } => items.iter().for_each(|t| t.collect_vars(seen, out)),
            Type::Named { args, .. } => args.iter().for_each(|t| t.collect_vars(seen, out)),
            Type::Record { fields, ext } => {
                if let Some(ext) = ext {
                    push(ext, seen, out);
                }
                fields.iter().for_each(|(_, t)| t.collect_vars(seen, out));
            }
        }
    }

    /// Rename every type variable (including record extension variables).
    pub fn rename_vars<F>(&self, rename: &F) -> Type
    where
        F: Fn(&str) -> String,
    {
        match self {
            Type::Var { name } => Type::var(rename(name)),
            Type::Lambda { input, output } => {
                Type::lambda(input.rename_vars(rename), output.rename_vars(rename))
            }
            Type::Tuple { items } => {
                Type::tuple(items.iter().map(|t| t.rename_vars(rename)).collect())
            }
            Type::Named { name, args } => Type::named(
                name.clone(),
                args.iter().map(|t| t.rename_vars(rename)).collect(),
            ),
            Type::Record { fields, ext } => Type::Record {
                fields: fields
                    .iter()
                    .map(|(n, t)| (n.clone(), t.rename_vars(rename)))
                    .collect(),
                ext: ext.as_deref().map(rename),
            },
        }
    }

    /// Check that no record in this type lists the same field twice.
    ///
    /// # Errors
    /// * `DuplicateField` - naming `owner` and the repeated field
    pub fn check_fields(&self, owner: &str) -> Result<()> {
        match self {
            Type::Var { .. } => Ok(()),
            Type::Lambda { input, output } => {
                input.check_fields(owner)?;
                output.check_fields(owner)
            }
            Type::Tuple { items: types } | Type::Named { args: types, .. } => {
                types.iter().try_for_each(|t| t.check_fields(owner))
            }
            Type::Record { fields, .. } => {
                let mut names = BTreeSet::new();
                for (name, tipe) in fields {
                    if !names.insert(name.as_str()) {
                        return Err(ApiDiffError::DuplicateField {
                            owner: owner.to_string(),
                            field: name.clone(),
                        });
                    }
                    tipe.check_fields(owner)?;
                }
                Ok(())
            }
        }
    }
}
