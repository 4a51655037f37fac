//! Package parsing.
//!
//! A package is one comma-delimited observation: `678,0h50m` for daily steps
//! or `3000,Running,0h30m` for a training session. Fields are taken verbatim;
//! no whitespace is trimmed.

use crate::duration::parse_duration;
use crate::{ActivityPackage, Error, PackageKind, Result};

/// Parse a raw package of the given kind
///
/// The activity label of a training package is not checked here; unknown
/// labels are reported by the calculator as an outcome, not an error.
pub fn parse_package(data: &str, kind: PackageKind) -> Result<ActivityPackage> {
    let fields: Vec<&str> = data.split(',').collect();

    if fields.len() != kind.field_count() {
        return Err(Error::Format(format!(
            "expected {} comma-separated fields, got {} in {:?}",
            kind.field_count(),
            fields.len(),
            data
        )));
    }

    let steps = parse_steps(fields[0])?;

    let activity = match kind {
        PackageKind::DailySteps => None,
        PackageKind::Training => Some(fields[1].to_string()),
    };

    let duration = parse_duration(fields[fields.len() - 1])?;

    tracing::trace!(steps, ?activity, ?duration, "Parsed package");

    Ok(ActivityPackage {
        steps,
        activity,
        duration,
    })
}

fn parse_steps(field: &str) -> Result<u64> {
    let steps: i64 = field
        .parse()
        .map_err(|e| Error::Format(format!("invalid step count {:?}: {}", field, e)))?;

    if steps <= 0 {
        return Err(Error::Validation(format!(
            "step count must be greater than zero, got {}",
            steps
        )));
    }

    // Positive i64 always fits.
    Ok(steps as u64)
}
