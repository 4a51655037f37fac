#![forbid(unsafe_code)]

//! Core parsing and metric logic for Stride.
//!
//! This crate provides:
//! - Activity package parsing (step count, activity label, duration)
//! - Distance, speed and calorie formulas
//! - Report templates
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod duration;
pub mod parser;
pub mod calculator;
pub mod report;
pub mod tracker;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use duration::parse_duration;
pub use parser::parse_package;
pub use calculator::Calculator;
pub use tracker::{Tracker, UNKNOWN_TRAINING_TYPE};
