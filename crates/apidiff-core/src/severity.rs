//! Semantic-versioning severity of a set of API changes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ApiDiffError;

/// The minimal version bump a set of changes requires.
///
/// Ordered `Patch < Minor < Major`; combining severities takes the maximum,
/// so a single breaking change anywhere makes the whole package Major.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Nothing in the public API changed
    #[default]
    Patch,
    /// Only additions
    Minor,
    /// Something was removed or changed incompatibly
    Major,
}

impl Severity {
    /// Associative, commutative, idempotent maximum.
    pub fn combine(self, other: Severity) -> Severity {
        self.max(other)
    }

    /// Fold any number of severities; an empty input is `Patch`.
    pub fn max_of<I>(severities: I) -> Severity
    where
        I: IntoIterator<Item = Severity>,
    {
        severities
            .into_iter()
            .fold(Severity::Patch, Severity::combine)
    }

    /// Display label, e.g. `"MAJOR"`
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Patch => "PATCH",
            Severity::Minor => "MINOR",
            Severity::Major => "MAJOR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = ApiDiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "patch" => Ok(Severity::Patch),
            "minor" => Ok(Severity::Minor),
            "major" => Ok(Severity::Major),
            _ => Err(ApiDiffError::InvalidSeverity {
                text: s.to_string(),
            }),
        }
    }
}
