//! Plain data person with free functions.
//!
//! Every field is public and mutation is free for anyone holding a
//! `&mut Person`; no encapsulation is implied.

use crate::{HealthMetrics, PersonId};
use serde::{Deserialize, Serialize};

/// Plain person data
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Meters
    pub height: f64,
    /// Kilograms
    pub weight: f64,
    pub ldl: i32,
    pub hdl: i32,
}

pub fn create_person(
    id: i32,
    name: impl Into<String>,
    height: f64,
    weight: f64,
    ldl: i32,
    hdl: i32,
) -> Person {
    Person {
        id: PersonId(id),
        name: name.into(),
        height,
        weight,
        ldl,
        hdl,
    }
}

/// Overwrite the weight in place
pub fn set_weight(person: &mut Person, weight: f64) {
    tracing::debug!(
        "Person {}: weight {} -> {} kg",
        person.id,
        person.weight,
        weight
    );
    person.weight = weight;
}

pub fn get_bmi(person: &Person) -> f64 {
    crate::metrics::bmi(person.height, person.weight)
}

pub fn get_total_cholesterol(person: &Person) -> i64 {
    crate::metrics::total_cholesterol(person.ldl, person.hdl)
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
        create_person(p.id().0, p.name(), p.height(), p.weight(), p.ldl(), p.hdl())
    }
}

impl From<crate::functional::Person> for Person {
    fn from(p: crate::functional::Person) -> Self {
        create_person(p.id().0, p.name(), p.height(), p.weight(), p.ldl(), p.hdl())
    }
}
