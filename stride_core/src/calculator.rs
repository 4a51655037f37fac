//! Distance, speed and calorie formulas.
//!
//! All formulas are pure. Distance comes from step count and the configured
//! step length; calories use one model for walking and another for running:
//! - Walking: `(0.035 * weight + (speed² / height) * 0.029) * minutes`
//! - Running: `(18 * speed - 20) * weight`
//!
//! The running model goes negative below ~1.11 km/h. That result is returned
//! as-is.

use crate::{
    Activity, ActivityPackage, Error, MetricsResult, Result, TrainingOutcome, TrainingSummary,
    UserProfile,
};
use std::time::Duration;

/// Average step length in meters
pub const DEFAULT_STEP_LENGTH_M: f64 = 0.65;

const METERS_PER_KM: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALKING_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;
const RUNNING_SPEED_SHIFT: f64 = 20.0;

/// Elapsed time in fractional hours
pub fn hours(duration: Duration) -> f64 {
    duration.as_secs_f64() / 3600.0
}

/// Metric calculator parameterized by step length
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calculator {
    step_length_m: f64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            step_length_m: DEFAULT_STEP_LENGTH_M,
        }
    }
}

impl Calculator {
    /// Create a calculator with a custom step length (meters)
    pub fn new(step_length_m: f64) -> Result<Self> {
        if !step_length_m.is_finite() || step_length_m <= 0.0 {
            return Err(Error::Config(format!(
                "step length must be a positive number of meters, got {}",
                step_length_m
            )));
        }
        Ok(Self { step_length_m })
    }

    pub fn step_length_m(&self) -> f64 {
        self.step_length_m
    }

    /// Distance covered in kilometers
    pub fn distance(&self, steps: u64) -> f64 {
        steps as f64 * self.step_length_m / METERS_PER_KM
    }

    /// Mean speed in km/h, 0 for a zero duration
    pub fn mean_speed(&self, steps: u64, duration: Duration) -> f64 {
        if duration.is_zero() {
            return 0.0;
        }
        self.distance(steps) / hours(duration)
    }

    /// Calories burned walking
    ///
    /// `height_m` is not guarded: zero yields an infinite or NaN result.
    pub fn walking_calories(
        &self,
        steps: u64,
        weight_kg: f64,
        height_m: f64,
        duration: Duration,
    ) -> f64 {
        let speed = self.mean_speed(steps, duration);
        (WALKING_WEIGHT_MULTIPLIER * weight_kg
            + (speed * speed / height_m) * WALKING_SPEED_HEIGHT_MULTIPLIER)
            * hours(duration)
            * MINUTES_PER_HOUR
    }

    /// Calories burned running, negative at very low speeds
    pub fn running_calories(&self, steps: u64, weight_kg: f64, duration: Duration) -> f64 {
        let speed = self.mean_speed(steps, duration);
        (RUNNING_SPEED_MULTIPLIER * speed - RUNNING_SPEED_SHIFT) * weight_kg
    }

    /// All metrics for one activity
    pub fn metrics(
        &self,
        steps: u64,
        duration: Duration,
        activity: Activity,
        profile: &UserProfile,
    ) -> MetricsResult {
        let calories_burned = match activity {
            Activity::Walking => {
                self.walking_calories(steps, profile.weight_kg, profile.height_m, duration)
            }
            Activity::Running => self.running_calories(steps, profile.weight_kg, duration),
        };

        MetricsResult {
            distance_km: self.distance(steps),
            mean_speed_kmh: self.mean_speed(steps, duration),
            calories_burned,
        }
    }

    /// Compute a training session, dispatching on the package's label
    pub fn training_info(
        &self,
        package: &ActivityPackage,
        profile: &UserProfile,
    ) -> TrainingOutcome {
        let label = package.activity.as_deref().unwrap_or_default();

        let Some(activity) = Activity::from_label(label) else {
            tracing::warn!("Unrecognized training type: {:?}", label);
            return TrainingOutcome::UnknownActivity {
                label: label.to_string(),
            };
        };

        let metrics = self.metrics(package.steps, package.duration, activity, profile);
        tracing::debug!(
            "{} session: {} steps, {:.2} km, {:.2} km/h, {:.2} kcal",
            activity,
            package.steps,
            metrics.distance_km,
            metrics.mean_speed_kmh,
            metrics.calories_burned
        );

        TrainingOutcome::Completed(TrainingSummary {
            activity,
            steps: package.steps,
            duration_hours: hours(package.duration),
            metrics,
        })
    }
}
