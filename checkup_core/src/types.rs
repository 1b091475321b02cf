//! Shared domain types for the Medical Checkup model.
//!
//! This module defines the pieces every person representation shares:
//! - The person identifier
//! - The `HealthMetrics` trait that lets generic code read measurements
//!   and derived metrics from any representation

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identity
// ============================================================================

/// Opaque person identifier
///
/// Uniqueness is the caller's concern; nothing here checks it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PersonId(pub i32);

impl From<i32> for PersonId {
    fn from(value: i32) -> Self {
        PersonId(value)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Metrics Trait
// ============================================================================

/// Read access to a person's measurements plus the derived metrics
///
/// Implemented by all three person representations so they can be used
/// interchangeably (see `run_checkup`).
pub trait HealthMetrics {
    fn id(&self) -> PersonId;
    fn name(&self) -> &str;
    /// Height in meters
    fn height(&self) -> f64;
    /// Weight in kilograms
    fn weight(&self) -> f64;
    fn ldl(&self) -> i32;
    fn hdl(&self) -> i32;

    /// Body mass index, `weight / height^2`
    ///
    /// Zero height yields a non-finite value rather than an error.
    fn bmi(&self) -> f64 {
        crate::metrics::bmi(self.height(), self.weight())
    }

    /// Sum of LDL and HDL
    fn total_cholesterol(&self) -> i64 {
        crate::metrics::total_cholesterol(self.ldl(), self.hdl())
    }
}
