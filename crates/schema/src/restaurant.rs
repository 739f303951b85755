//! Restaurant catalog records.

use std::collections::BTreeMap;

use common::{Constraint, Money, ValidationError};
use serde::{Deserialize, Serialize};

use crate::address::{Address, Location};

fn default_true() -> bool {
    true
}

/// A menu entry published by a restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Assigned by the restaurant service.
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Money,
    pub category: String,
    #[serde(default = "default_true")]
    pub available: bool,
    /// Minutes.
    pub preparation_time: i32,
}

impl MenuItem {
    /// Creates an available menu item without an id.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        preparation_time: i32,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            price,
            category: category.into(),
            available: true,
            preparation_time,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }
}

/// Average customer rating, within [0, 5].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 5.0;

    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::new("rating", Constraint::NotFinite));
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::new(
                "rating",
                Constraint::OutOfRange {
                    min: Self::MIN,
                    max: Self::MAX,
                    value,
                },
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Rating {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A restaurant listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub address: Address,
    pub location: Location,
    pub phone: String,
    pub email: String,
    pub cuisine_type: String,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Day name to opening hours, e.g. `"monday" => "10:00-22:00"`.
    #[serde(default)]
    pub operating_hours: Option<BTreeMap<String, String>>,
}

impl Restaurant {
    /// Creates an active, unrated restaurant without an id.
    pub fn new(
        name: impl Into<String>,
        address: Address,
        location: Location,
        phone: impl Into<String>,
        email: impl Into<String>,
        cuisine_type: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            address,
            location,
            phone: phone.into(),
            email: email.into(),
            cuisine_type: cuisine_type.into(),
            rating: None,
            is_active: true,
            operating_hours: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the rating, rejecting values outside [0, 5].
    pub fn with_rating(mut self, rating: f64) -> Result<Self, ValidationError> {
        self.rating = Some(Rating::new(rating)?);
        Ok(self)
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the opening hours for one day.
    pub fn with_hours(mut self, day: impl Into<String>, hours: impl Into<String>) -> Self {
        self.operating_hours
            .get_or_insert_with(BTreeMap::new)
            .insert(day.into(), hours.into());
        self
    }
}
