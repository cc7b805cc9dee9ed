//! Diff configuration.

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Options for a package or module diff.
///
/// Every field defaults to `false`, so an empty JSON object (or
/// `DiffConfig::default()`) gives the plain bijective-renaming discipline,
/// computed sequentially.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Enforce constrained type-variable categories (`number`, `comparable`,
    /// `appendable`, `compappend`) when pairing variables.
    pub constrained_type_vars: bool,
    /// Diff modules present in both snapshots on the rayon thread pool.
    pub parallel: bool,
}

impl DiffConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constrained_type_vars(mut self, enabled: bool) -> Self {
        self.constrained_type_vars = enabled;
        self
    }

    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Parse a configuration from JSON; missing keys take their defaults.
    ///
    /// # Errors
    /// * `Serialization` - the text is not a valid configuration object
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiDiffError;

    #[test]
    fn test_default_is_plain_and_sequential() {
        let config = DiffConfig::default();
        assert!(!config.constrained_type_vars);
        assert!(!config.parallel);
    }

    #[test]
    fn test_from_json_fills_missing_keys() {
        let config = DiffConfig::from_json_str(r#"{"parallel": true}"#).unwrap();
        assert_eq!(config, DiffConfig::new().with_parallel(true));
    }

    #[test]
    fn test_from_json_rejects_wrong_type() {
        let err = DiffConfig::from_json_str(r#"{"parallel": "yes"}"#).unwrap_err();
        assert!(matches!(err, ApiDiffError::Serialization { .. }));
    }
}
