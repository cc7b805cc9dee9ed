use thiserror::Error;

/// Result type alias using ApiDiffError
pub type Result<T> = std::result::Result<T, ApiDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and reporting by collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Snapshot construction
    /// An entity or module name occurs twice in the same collection
    DuplicateName,
    /// A union declares the same variant name twice
    DuplicateVariant,
    /// A union or alias declares the same generic parameter twice
    DuplicateParameter,
    /// A record type lists the same field twice
    DuplicateField,
    /// Operator precedence outside 0..=9
    InvalidPrecedence,
    /// A package map key differs from the module's own name
    ModuleNameMismatch,

    // Versioning
    InvalidSeverity,
    InvalidVersion,
    InvalidBump,

    // Integration
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::DuplicateName => "ERR_DUPLICATE_NAME",
            ExErrorKind::DuplicateVariant => "ERR_DUPLICATE_VARIANT",
            ExErrorKind::DuplicateParameter => "ERR_DUPLICATE_PARAMETER",
            ExErrorKind::DuplicateField => "ERR_DUPLICATE_FIELD",
            ExErrorKind::InvalidPrecedence => "ERR_INVALID_PRECEDENCE",
            ExErrorKind::ModuleNameMismatch => "ERR_MODULE_NAME_MISMATCH",
            ExErrorKind::InvalidSeverity => "ERR_INVALID_SEVERITY",
            ExErrorKind::InvalidVersion => "ERR_INVALID_VERSION",
            ExErrorKind::InvalidBump => "ERR_INVALID_BUMP",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the module and
/// entity the failure refers to.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    module: Option<String>,
    entity: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            module: None,
            entity: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add module context
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Add entity context
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(module) = &self.module {
            write!(f, " (module: {})", module)?;
        }
        if let Some(entity) = &self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for apidiff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiDiffError {
    // ===== Snapshot Construction =====
    /// A name is declared twice in one collection
    #[error("Duplicate {kind} `{name}` in {scope}")]
    DuplicateName {
        kind: &'static str,
        name: String,
        scope: String,
    },

    #[error("Union `{union}` declares variant `{variant}` more than once")]
    DuplicateVariant { union: String, variant: String },

    #[error("`{owner}` declares type parameter `{param}` more than once")]
    DuplicateParameter { owner: String, param: String },

    #[error("Record type in `{owner}` declares field `{field}` more than once")]
    DuplicateField { owner: String, field: String },

    #[error("Operator `{op}` has precedence {precedence}, expected 0..=9")]
    InvalidPrecedence { op: String, precedence: u8 },

    #[error("Package lists module `{name}` under key `{key}`")]
    ModuleNameMismatch { key: String, name: String },

    // ===== Versioning =====
    #[error("Unknown severity `{text}`, expected patch, minor or major")]
    InvalidSeverity { text: String },

    #[error("Invalid version `{text}`: {reason}")]
    InvalidVersion { text: String, reason: String },

    /// The proposed version does not match the bump the changes require
    #[error("Version {proposed} is not a valid bump from {old}: {severity} changes require {expected}")]
    InvalidBump {
        old: String,
        proposed: String,
        expected: String,
        severity: String,
    },

    // ===== Integration =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<ApiDiffError> for ExError {
    fn from(err: ApiDiffError) -> Self {
        let message = err.to_string();
        match err {
            ApiDiffError::DuplicateName { name, scope, .. } => {
                ExError::new(ExErrorKind::DuplicateName)
                    .with_module(scope)
                    .with_entity(name)
                    .with_message(message)
            }
            ApiDiffError::DuplicateVariant { union, .. } => {
                ExError::new(ExErrorKind::DuplicateVariant)
                    .with_entity(union)
                    .with_message(message)
            }
            ApiDiffError::DuplicateParameter { owner, .. } => {
                ExError::new(ExErrorKind::DuplicateParameter)
                    .with_entity(owner)
                    .with_message(message)
            }
            ApiDiffError::DuplicateField { owner, .. } => {
                ExError::new(ExErrorKind::DuplicateField)
                    .with_entity(owner)
                    .with_message(message)
            }
            ApiDiffError::InvalidPrecedence { op, .. } => {
                ExError::new(ExErrorKind::InvalidPrecedence)
                    .with_entity(op)
                    .with_message(message)
            }
            ApiDiffError::ModuleNameMismatch { key, name } => {
                ExError::new(ExErrorKind::ModuleNameMismatch)
                    .with_module(key)
                    .with_entity(name)
                    .with_message(message)
            }
            ApiDiffError::InvalidSeverity { .. } => {
                ExError::new(ExErrorKind::InvalidSeverity).with_message(message)
            }
            ApiDiffError::InvalidVersion { .. } => {
                ExError::new(ExErrorKind::InvalidVersion).with_message(message)
            }
            ApiDiffError::InvalidBump { .. } => ExError::new(ExErrorKind::InvalidBump)
                .with_op("check_bump")
                .with_message(message),
            ApiDiffError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to ApiDiffError
impl From<serde_json::Error> for ApiDiffError {
    fn from(err: serde_json::Error) -> Self {
        ApiDiffError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_stable() {
        let cases = [
            (ExErrorKind::DuplicateName, "ERR_DUPLICATE_NAME"),
            (ExErrorKind::DuplicateVariant, "ERR_DUPLICATE_VARIANT"),
            (ExErrorKind::DuplicateParameter, "ERR_DUPLICATE_PARAMETER"),
            (ExErrorKind::DuplicateField, "ERR_DUPLICATE_FIELD"),
            (ExErrorKind::InvalidPrecedence, "ERR_INVALID_PRECEDENCE"),
            (ExErrorKind::ModuleNameMismatch, "ERR_MODULE_NAME_MISMATCH"),
            (ExErrorKind::InvalidSeverity, "ERR_INVALID_SEVERITY"),
            (ExErrorKind::InvalidVersion, "ERR_INVALID_VERSION"),
            (ExErrorKind::InvalidBump, "ERR_INVALID_BUMP"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_duplicate_name_carries_scope_and_entity() {
        let err = ApiDiffError::DuplicateName {
            kind: "value",
            name: "map".to_string(),
            scope: "List".to_string(),
        };
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::DuplicateName);
        assert_eq!(ex.module(), Some("List"));
        assert_eq!(ex.entity(), Some("map"));
        assert!(ex.message().contains("Duplicate value `map`"));
    }

    #[test]
    fn test_display_includes_code_and_op() {
        let ex = ExError::new(ExErrorKind::InvalidBump)
            .with_op("check_bump")
            .with_message("expected 2.0.0");
        let shown = ex.to_string();
        assert!(shown.starts_with("[ERR_INVALID_BUMP]"));
        assert!(shown.contains("check_bump"));
        assert!(shown.contains("expected 2.0.0"));
    }

    #[test]
    fn test_serde_json_error_maps_to_serialization() {
        let parse_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: ApiDiffError = parse_err.into();
        assert!(matches!(err, ApiDiffError::Serialization { .. }));
        let ex: ExError = err.into();
        assert_eq!(ex.code(), "ERR_SERIALIZATION");
    }
}
