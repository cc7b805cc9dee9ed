//! Operation boundary macros
//!
//! Every event carries `component`, `op` and `event`; callers append their
//! own fields (`severity`, `modules_added`, ...) after the fixed ones.

/// `info` event with `event = "start"`
///
/// # Example
///
/// ```
/// # use apidiff_core::log_op_start;
/// log_op_start!("check_bump");
/// log_op_start!("diff_package", modules_before = 3u64, modules_after = 4u64, parallel = false);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// `info` event with `event = "end"`; `duration_ms` is required
///
/// # Example
///
/// ```
/// # use apidiff_core::{log_op_end, Severity};
/// log_op_end!(
///     "diff_package",
///     duration_ms = 3u64,
///     severity = %Severity::Minor,
///     modules_added = 1u64
/// );
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// `error` event with `event = "end_error"` plus `err.kind` / `err.code`
///
/// The error is converted into [`ExError`](crate::errors::ExError) for its
/// stable code.
///
/// # Example
///
/// ```
/// # use apidiff_core::{log_op_error, errors::ApiDiffError};
/// let err = ApiDiffError::InvalidBump {
///     old: "1.2.3".to_string(),
///     proposed: "1.2.4".to_string(),
///     expected: "2.0.0".to_string(),
///     severity: "MAJOR".to_string(),
/// };
/// log_op_error!("check_bump", err, duration_ms = 0u64, proposed = "1.2.4");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}
