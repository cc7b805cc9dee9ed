//! Semantic version bumping driven by diff severity.

use std::time::Instant;

use semver::Version;

use crate::diff::diff_package;
use crate::errors::{ApiDiffError, Result};
use crate::model::PackageSnapshot;
use crate::severity::Severity;
use crate::{log_op_end, log_op_error, log_op_start};

/// Parse a `MAJOR.MINOR.PATCH` version.
///
/// # Errors
/// * `InvalidVersion` - the text is not a semantic version
pub fn parse_version(text: &str) -> Result<Version> {
    Version::parse(text.trim()).map_err(|e| ApiDiffError::InvalidVersion {
        text: text.to_string(),
        reason: e.to_string(),
    })
}

/// The smallest version after `version` allowed for changes of `severity`.
///
/// Pre-release and build metadata are dropped. Components saturate at
/// `u64::MAX`, so the result can equal `version`; [`check_bump`] rejects
/// such a proposal.
pub fn bump(version: &Version, severity: Severity) -> Version {
    match severity {
        Severity::Patch => Version::new(
            version.major,
            version.minor,
            version.patch.saturating_add(1),
        ),
        Severity::Minor => Version::new(version.major, version.minor.saturating_add(1), 0),
        Severity::Major => Version::new(version.major.saturating_add(1), 0, 0),
    }
}

/// Diff two snapshots and compute the version that should follow `old`.
///
/// # Example
///
/// ```
/// use apidiff_core::model::{ModuleSnapshot, PackageSnapshot};
/// use apidiff_core::version::{parse_version, suggest_version};
/// use apidiff_core::Severity;
///
/// let earlier = PackageSnapshot::new();
/// let later = PackageSnapshot::new().with_module(ModuleSnapshot::new("C")).unwrap();
/// let old = parse_version("1.2.3").unwrap();
///
/// let (severity, next) = suggest_version(&old, &earlier, &later);
/// assert_eq!(severity, Severity::Minor);
/// assert_eq!(next.to_string(), "1.3.0");
/// ```
pub fn suggest_version(
    old: &Version,
    earlier: &PackageSnapshot,
    later: &PackageSnapshot,
) -> (Severity, Version) {
    let severity = diff_package(earlier, later).severity();
    (severity, bump(old, severity))
}

/// Check that `proposed` is exactly the bump `severity` requires from `old`.
///
/// # Errors
/// * `InvalidVersion` - `proposed` does not parse
/// * `InvalidBump` - `proposed` is not greater than `old`, or is not
///   `bump(old, severity)`
pub fn check_bump(old: &Version, proposed: &str, severity: Severity) -> Result<()> {
    let start = Instant::now();
    log_op_start!(
        "check_bump",
        old = %old,
        proposed = proposed,
        severity = %severity
    );

    let result = parse_version(proposed).and_then(|proposed| {
        let expected = bump(old, severity);
        if proposed > *old && proposed == expected {
            Ok(())
        } else {
            Err(ApiDiffError::InvalidBump {
                old: old.to_string(),
                proposed: proposed.to_string(),
                expected: expected.to_string(),
                severity: severity.to_string(),
            })
        }
    });

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => {
            log_op_end!("check_bump", duration_ms = duration_ms);
        }
        Err(err) => {
            log_op_error!("check_bump", err.clone(), duration_ms = duration_ms);
        }
    }
    result
}
