#![forbid(unsafe_code)]

//! Core domain model for the Medical Checkup library.
//!
//! This crate provides:
//! - The person model in three styles (encapsulated, functional, imperative)
//! - BMI and total cholesterol formulas
//! - Opt-in measurement validation
//! - Checkup reports driven by configuration

pub mod types;
pub mod error;
pub mod metrics;
pub mod validation;
pub mod encapsulated;
pub mod functional;
pub mod imperative;
pub mod config;
pub mod logging;
pub mod checkup;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use metrics::{bmi, checked_bmi, total_cholesterol};
pub use validation::validate_measurements;
pub use config::Config;
pub use checkup::{run_checkup, CheckupReport};
