//! Checkup reports.
//!
//! A report snapshots identity and the derived metrics of any person
//! representation, under the validation policy from `Config`.

use crate::{validation::validate_measurements, Config, HealthMetrics, PersonId, Result};
use serde::{Deserialize, Serialize};

/// Derived metrics for one person at one point in time
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CheckupReport {
    pub id: PersonId,
    pub name: String,
    pub bmi: f64,
    pub total_cholesterol: i64,
}

/// Build a checkup report for a person
///
/// With `validation.strict` set, bad height or weight is an error.
/// Otherwise the report carries whatever the formulas produce.
pub fn run_checkup<P: HealthMetrics + ?Sized>(
    person: &P,
    config: &Config,
) -> Result<CheckupReport> {
    if config.validation.strict {
        validate_measurements(person.height(), person.weight())?;
    }

    let bmi = person.bmi();
    if !bmi.is_finite() {
        tracing::warn!(
            "Person {} ({}): BMI is not finite (height {} m, weight {} kg)",
            person.id(),
            person.name(),
            person.height(),
            person.weight()
        );
    }

    let report = CheckupReport {
        id: person.id(),
        name: person.name().to_string(),
        bmi,
        total_cholesterol: person.total_cholesterol(),
    };
    tracing::debug!("Checkup for person {}: {:?}", report.id, report);
    Ok(report)
}
