use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::errors::{ApiDiffError, Result};
use crate::model::types::Type;

/// Highest precedence an infix operator may declare.
pub const MAX_PRECEDENCE: u8 = 9;

/// A custom (sum) type: `type Shape = Circle Float | Square Float`.
///
/// Variants keep their declared order for display, but they are matched by
/// name when diffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Union {
    #[serde(default)]
    pub params: Vec<String>,
    pub variants: Vec<Variant>,
}

/// One constructor of a [`Union`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Type>,
}

impl Union {
    pub fn new(params: &[&str]) -> Self {
        Self {
            params: params.iter().map(|p| p.to_string()).collect(),
            variants: Vec::new(),
        }
    }

    /// Append a variant, keeping declaration order
    pub fn with_variant(mut self, name: impl Into<String>, args: Vec<Type>) -> Self {
        self.variants.push(Variant {
            name: name.into(),
            args,
        });
        self
    }

    /// Look up a variant by name
    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Validate the union's own invariants.
    ///
    /// # Errors
    /// * `DuplicateParameter` - a type parameter is declared twice
    /// * `DuplicateVariant` - a variant name is declared twice
    /// * `DuplicateField` - a record in a variant argument repeats a field
    pub fn validate(&self, name: &str) -> Result<()> {
        check_params(name, &self.params)?;
        let mut seen = BTreeSet::new();
        for variant in &self.variants {
            if !seen.insert(variant.name.as_str()) {
                return Err(ApiDiffError::DuplicateVariant {
                    union: name.to_string(),
                    variant: variant.name.clone(),
                });
            }
            for arg in &variant.args {
                arg.check_fields(name)?;
            }
        }
        Ok(())
    }
}

/// A type alias: `type alias Pair a = ( a, a )`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    #[serde(default)]
    pub params: Vec<String>,
    pub body: Type,
}

impl Alias {
    pub fn new(params: &[&str], body: Type) -> Self {
        Self {
            params: params.iter().map(|p| p.to_string()).collect(),
            body,
        }
    }

    /// # Errors
    /// * `DuplicateParameter` - a type parameter is declared twice
    /// * `DuplicateField` - the body repeats a record field
    pub fn validate(&self, name: &str) -> Result<()> {
        check_params(name, &self.params)?;
        self.body.check_fields(name)
    }
}

/// A top-level value or function with its type signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    pub signature: Type,
}

impl Value {
    pub fn new(signature: Type) -> Self {
        Self { signature }
    }

    /// # Errors
    /// * `DuplicateField` - the signature repeats a record field
    pub fn validate(&self, name: &str) -> Result<()> {
        self.signature.check_fields(name)
    }
}

/// Operator associativity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Associativity {
    Left,
    Non,
    Right,
}

/// An exported infix operator such as `(|>)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binop {
    pub signature: Type,
    pub associativity: Associativity,
    pub precedence: u8,
}

impl Binop {
    pub fn new(signature: Type, associativity: Associativity, precedence: u8) -> Self {
        Self {
            signature,
            associativity,
            precedence,
        }
    }

    /// # Errors
    /// * `InvalidPrecedence` - precedence above [`MAX_PRECEDENCE`]
    /// * `DuplicateField` - the signature repeats a record field
    pub fn validate(&self, name: &str) -> Result<()> {
        if self.precedence > MAX_PRECEDENCE {
            return Err(ApiDiffError::InvalidPrecedence {
                op: name.to_string(),
                precedence: self.precedence,
            });
        }
        self.signature.check_fields(name)
    }
}

fn check_params(owner: &str, params: &[String]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for param in params {
        if !seen.insert(param.as_str()) {
            return Err(ApiDiffError::DuplicateParameter {
                owner: owner.to_string(),
                param: param.clone(),
            });
        }
    }
    Ok(())
}
