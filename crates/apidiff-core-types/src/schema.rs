//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Module identifier
pub const FIELD_MODULE: &str = "module";

// Diff outcome
pub const FIELD_SEVERITY: &str = "severity";
pub const FIELD_MODULES_ADDED: &str = "modules_added";
pub const FIELD_MODULES_REMOVED: &str = "modules_removed";
pub const FIELD_MODULES_CHANGED: &str = "modules_changed";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
