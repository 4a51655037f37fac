//! Core domain types for Stride.
//!
//! This module defines:
//! - Parsed activity packages and their expected shapes
//! - The recognized activity types
//! - The user profile the formulas need
//! - Computed metrics and the summaries built from them

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// ============================================================================
// Package Types
// ============================================================================

/// Shape of an input package
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackageKind {
    /// `<steps>,<duration>`
    DailySteps,
    /// `<steps>,<activity>,<duration>`
    Training,
}

impl PackageKind {
    /// Number of comma-separated fields a package of this kind carries
    pub fn field_count(self) -> usize {
        match self {
            PackageKind::DailySteps => 2,
            PackageKind::Training => 3,
        }
    }
}

/// A parsed activity package
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityPackage {
    pub steps: u64,
    /// Raw label, kept verbatim; only present for training packages
    pub activity: Option<String>,
    pub duration: Duration,
}

// ============================================================================
// Activity Types
// ============================================================================

/// Recognized training activities
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Activity {
    Walking,
    Running,
}

impl Activity {
    /// Match a package label exactly (case-sensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Walking" => Some(Activity::Walking),
            "Running" => Some(Activity::Running),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Activity::Walking => "Walking",
            Activity::Running => "Running",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// User Profile
// ============================================================================

/// Biometrics supplied by the caller
///
/// Fields are public so the raw formulas can be exercised with any value;
/// [`UserProfile::new`] is the validated constructor the entry points use.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl UserProfile {
    /// Build a profile, rejecting non-finite or non-positive values
    pub fn new(weight_kg: f64, height_m: f64) -> Result<Self> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(Error::Validation(format!(
                "weight must be a positive number, got {}",
                weight_kg
            )));
        }
        if !height_m.is_finite() || height_m <= 0.0 {
            return Err(Error::Validation(format!(
                "height must be a positive number, got {}",
                height_m
            )));
        }
        Ok(Self {
            weight_kg,
            height_m,
        })
    }
}

// ============================================================================
// Results
// ============================================================================

/// Metrics derived from one package
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MetricsResult {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_burned: f64,
}

/// Daily step package computed with the walking formula
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DailySummary {
    pub steps: u64,
    pub duration_hours: f64,
    pub metrics: MetricsResult,
}

/// Labeled training session
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrainingSummary {
    pub activity: Activity,
    pub steps: u64,
    pub duration_hours: f64,
    pub metrics: MetricsResult,
}

/// Outcome of a training computation
///
/// An unrecognized label is a normal outcome, distinct from a parse failure.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TrainingOutcome {
    Completed(TrainingSummary),
    UnknownActivity { label: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_counts() {
        assert_eq!(PackageKind::DailySteps.field_count(), 2);
        assert_eq!(PackageKind::Training.field_count(), 3);
    }

    #[test]
    fn test_activity_labels_are_case_sensitive() {
        assert_eq!(Activity::from_label("Walking"), Some(Activity::Walking));
        assert_eq!(Activity::from_label("Running"), Some(Activity::Running));
        assert_eq!(Activity::from_label("running"), None);
        assert_eq!(Activity::from_label(" Running"), None);
        assert_eq!(Activity::from_label("Swimming"), None);
        assert_eq!(Activity::Running.to_string(), "Running");
    }

    #[test]
    fn test_profile_validation() {
        assert!(UserProfile::new(70.0, 1.75).is_ok());
        assert!(matches!(
            UserProfile::new(0.0, 1.75),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            UserProfile::new(70.0, 0.0),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            UserProfile::new(70.0, -1.0),
            Err(Error::Validation(_))
        ));
        assert!(UserProfile::new(f64::NAN, 1.75).is_err());
        assert!(UserProfile::new(70.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_unknown_activity_json_shape() {
        let outcome = TrainingOutcome::UnknownActivity {
            label: "Swimming".into(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "unknown_activity");
        assert_eq!(json["label"], "Swimming");
    }
}
