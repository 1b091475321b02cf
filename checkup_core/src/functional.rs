//! Immutable person record with free functions.
//!
//! Fields are private and nothing here takes `&mut`, so a record never
//! changes after construction. "Setting" the weight builds a new record
//! and leaves the original as it was.

use crate::{HealthMetrics, PersonId};
use serde::{Deserialize, Serialize};

/// Immutable person record
///
/// Read through `HealthMetrics`; `with_weight` is the only way to get a
/// record with a different weight.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Person {
    id: PersonId,
    name: String,
    /// Meters
    height: f64,
    /// Kilograms
    weight: f64,
    ldl: i32,
    hdl: i32,
}

impl Person {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        height: f64,
        weight: f64,
        ldl: i32,
        hdl: i32,
    ) -> Self {
        Self {
            id: PersonId(id),
            name: name.into(),
            height,
            weight,
            ldl,
            hdl,
        }
    }

    /// Copy of this record with a different weight
    #[must_use]
    pub fn with_weight(&self, weight: f64) -> Self {
        Self {
            weight,
            ..self.clone()
        }
    }
}

pub fn get_bmi(person: &Person) -> f64 {
    crate::metrics::bmi(person.height, person.weight)
}

pub fn get_total_cholesterol(person: &Person) -> i64 {
    crate::metrics::total_cholesterol(person.ldl, person.hdl)
}

/// Return a new record with `weight` replaced; `person` is untouched
#[must_use]
pub fn set_weight(person: &Person, weight: f64) -> Person {
    tracing::debug!(
        "Person {}: new record with weight {} kg (was {})",
        person.id,
        weight,
        person.weight
    );
    person.with_weight(weight)
}

impl HealthMetrics for Person {
    fn id(&self) -> PersonId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn ldl(&self) -> i32 {
        self.ldl
    }

    fn hdl(&self) -> i32 {
        self.hdl
    }
}

impl From<crate::encapsulated::Person> for Person {
    fn from(p: crate::encapsulated::Person) -> Self {
        Self::new(p.id().0, p.name(), p.height(), p.weight(), p.ldl(), p.hdl())
    }
}

impl From<crate::imperative::Person> for Person {
    fn from(p: crate::imperative::Person) -> Self {
        Self {
            id: p.id,
            name: p.name,
            height: p.height,
            weight: p.weight,
            ldl: p.ldl,
            hdl: p.hdl,
        }
    }
}
