//! Encapsulated person with controlled mutation.
//!
//! Fields are private. Measurements are read through `HealthMetrics` and
//! the weight is the only thing that can change, through `set_weight`.

use crate::{HealthMetrics, PersonId};
use serde::{Deserialize, Serialize};

/// A person whose state can only change through `set_weight`
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
    /// Create a person; no measurement is validated
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

    /// Replace the weight in place
    ///
    /// Single entry point for weight changes, so any future check on the
    /// new value belongs here.
    pub fn set_weight(&mut self, weight: f64) {
        tracing::debug!(
            "Person {}: weight {} -> {} kg",
            self.id,
            self.weight,
            weight
        );
        self.weight = weight;
    }
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

impl From<crate::functional::Person> for Person {
    fn from(p: crate::functional::Person) -> Self {
        Self::new(p.id().0, p.name(), p.height(), p.weight(), p.ldl(), p.hdl())
    }
}

impl From<crate::imperative::Person> for Person {
    fn from(p: crate::imperative::Person) -> Self {
        Self::new(p.id.0, p.name, p.height, p.weight, p.ldl, p.hdl)
    }
}
