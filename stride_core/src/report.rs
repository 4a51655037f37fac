//! Human-readable report templates.

use crate::{DailySummary, TrainingSummary};

/// Render a daily steps report
pub fn daily_report(summary: &DailySummary) -> String {
    format!(
        "Steps: {}.\nDistance: {:.2} km.\nCalories burned: {:.2} kcal.\n",
        summary.steps, summary.metrics.distance_km, summary.metrics.calories_burned
    )
}

/// Render a training session report
pub fn training_report(summary: &TrainingSummary) -> String {
    format!(
        "Training type: {}\nDuration: {:.2} h.\nDistance: {:.2} km.\nSpeed: {:.2} km/h\nCalories burned: {:.2}\n",
        summary.activity,
        summary.duration_hours,
        summary.metrics.distance_km,
        summary.metrics.mean_speed_kmh,
        summary.metrics.calories_burned
    )
}
