//! Entry points tying parsing, calculation and reporting together.
//!
//! Two families are offered:
//! - [`Tracker::daily_steps`] and [`Tracker::training`] return a `Result`
//!   and never format text.
//! - [`Tracker::daily_steps_report`] and [`Tracker::training_report`] return
//!   report strings. They keep the established failure signaling: the daily
//!   report logs the error and returns an empty string, the training report
//!   returns the error text itself.

use crate::calculator::hours;
use crate::parser::parse_package;
use crate::report;
use crate::{
    Activity, Calculator, DailySummary, PackageKind, Result, TrainingOutcome, UserProfile,
};

/// Returned by [`Tracker::training_report`] for unrecognized labels
pub const UNKNOWN_TRAINING_TYPE: &str = "unknown training type";

/// Stateless package processor
#[derive(Clone, Copy, Debug, Default)]
pub struct Tracker {
    calculator: Calculator,
}

impl Tracker {
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Process a `<steps>,<duration>` package with the walking formula
    pub fn daily_steps(&self, data: &str, profile: &UserProfile) -> Result<DailySummary> {
        let package = parse_package(data, PackageKind::DailySteps)?;
        let metrics = self.calculator.metrics(
            package.steps,
            package.duration,
            Activity::Walking,
            profile,
        );

        tracing::debug!(
            "Daily package: {} steps, {:.2} km, {:.2} kcal",
            package.steps,
            metrics.distance_km,
            metrics.calories_burned
        );

        Ok(DailySummary {
            steps: package.steps,
            duration_hours: hours(package.duration),
            metrics,
        })
    }

    /// Process a `<steps>,<activity>,<duration>` package
    pub fn training(&self, data: &str, profile: &UserProfile) -> Result<TrainingOutcome> {
        let package = parse_package(data, PackageKind::Training)?;
        Ok(self.calculator.training_info(&package, profile))
    }

    /// Daily steps report, or `""` if the package or profile is invalid
    pub fn daily_steps_report(&self, data: &str, weight_kg: f64, height_m: f64) -> String {
        let summary = UserProfile::new(weight_kg, height_m)
            .and_then(|profile| self.daily_steps(data, &profile));

        match summary {
            Ok(summary) => report::daily_report(&summary),
            Err(e) => {
                tracing::error!("Rejected daily package {:?}: {}", data, e);
                String::new()
            }
        }
    }

    /// Training report, the error text on failure, or
    /// [`UNKNOWN_TRAINING_TYPE`] for an unrecognized label
    pub fn training_report(&self, data: &str, weight_kg: f64, height_m: f64) -> String {
        let outcome = UserProfile::new(weight_kg, height_m)
            .and_then(|profile| self.training(data, &profile));

        match outcome {
            Ok(TrainingOutcome::Completed(summary)) => report::training_report(&summary),
            Ok(TrainingOutcome::UnknownActivity { .. }) => UNKNOWN_TRAINING_TYPE.to_string(),
            Err(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn profile() -> UserProfile {
        UserProfile::new(70.0, 1.75).unwrap()
    }

    #[test]
    fn test_daily_steps_summary() {
        let tracker = Tracker::default();
        let summary = tracker.daily_steps("678,0h50m", &profile()).unwrap();

        assert_eq!(summary.steps, 678);
        assert!((summary.metrics.distance_km - 0.4407).abs() < 1e-9);
        assert!((summary.metrics.calories_burned - 122.7317).abs() < 1e-3);
    }

    #[test]
    fn test_daily_steps_report() {
        let report = Tracker::default().daily_steps_report("678,0h50m", 70.0, 1.75);
        assert_eq!(
            report,
            "Steps: 678.\nDistance: 0.44 km.\nCalories burned: 122.73 kcal.\n"
        );
    }

    #[test]
    fn test_daily_report_rejects_bad_packages() {
        crate::logging::init_test();
        let tracker = Tracker::default();

        assert_eq!(tracker.daily_steps_report("0,0h10m", 70.0, 175.0), "");
        assert_eq!(tracker.daily_steps_report("-5,0h10m", 70.0, 175.0), "");
        assert_eq!(tracker.daily_steps_report("678,abc", 70.0, 175.0), "");
        assert_eq!(tracker.daily_steps_report("678", 70.0, 175.0), "");
        assert_eq!(tracker.daily_steps_report("678,Walking,1h", 70.0, 175.0), "");
    }

    #[test]
    fn test_daily_report_rejects_invalid_profile() {
        crate::logging::init_test();
        assert_eq!(
            Tracker::default().daily_steps_report("678,0h50m", 70.0, 0.0),
            ""
        );
    }

    #[test]
    fn test_daily_steps_structured_errors() {
        let tracker = Tracker::default();
        assert!(matches!(
            tracker.daily_steps("0,0h10m", &profile()),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            tracker.daily_steps("678,abc", &profile()),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn test_training_report_running() {
        let report = Tracker::default().training_report("3000,Running,1h0m", 75.0, 180.0);
        assert_eq!(
            report,
            "Training type: Running\nDuration: 1.00 h.\nDistance: 1.95 km.\nSpeed: 1.95 km/h\nCalories burned: 1132.50\n"
        );
    }

    #[test]
    fn test_training_report_unknown_type() {
        let report = Tracker::default().training_report("1000,Swimming,0h20m", 70.0, 175.0);
        assert_eq!(report, UNKNOWN_TRAINING_TYPE);
    }

    #[test]
    fn test_training_report_returns_error_text() {
        let tracker = Tracker::default();

        let report = tracker.training_report("3000,Running", 70.0, 1.75);
        assert!(report.starts_with("format error:"), "got {:?}", report);

        let report = tracker.training_report("0,Running,30m", 70.0, 1.75);
        assert!(report.starts_with("validation error:"), "got {:?}", report);

        let report = tracker.training_report("3000,Running,30m", -1.0, 1.75);
        assert!(report.contains("weight"), "got {:?}", report);
    }

    #[test]
    fn test_parse_failure_wins_over_unknown_label() {
        let report = Tracker::default().training_report("1000,Swimming,abc", 70.0, 1.75);
        assert_ne!(report, UNKNOWN_TRAINING_TYPE);
        assert!(report.starts_with("format error:"));
    }

    #[test]
    fn test_custom_step_length_changes_distance() {
        let tracker = Tracker::new(Calculator::new(1.3).unwrap());
        let summary = tracker.daily_steps("1000,1h", &profile()).unwrap();
        assert!((summary.metrics.distance_km - 1.3).abs() < 1e-9);
        assert!((summary.metrics.mean_speed_kmh - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_training_walking_outcome() {
        let outcome = Tracker::default()
            .training("6000,Walking,1h", &profile())
            .unwrap();
        match outcome {
            TrainingOutcome::Completed(summary) => {
                assert_eq!(summary.activity, Activity::Walking);
                assert!((summary.metrics.mean_speed_kmh - 3.9).abs() < 1e-9);
            }
            other => panic!("Expected completed training, got {:?}", other),
        }
    }
}
