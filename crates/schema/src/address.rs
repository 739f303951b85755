//! Postal addresses and geographic coordinates.

use common::{Constraint, ValidationError};
use serde::{Deserialize, Serialize};

fn default_country() -> String {
    "US".to_string()
}

/// A postal address. Only field presence is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default = "default_country")]
    pub country: String,
}

impl Address {
    /// Creates a US address.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
            country: default_country(),
        }
    }

    /// Overrides the default `"US"` country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }
}

fn check_range(field: &'static str, value: f64, limit: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(field, Constraint::NotFinite));
    }
    if !(-limit..=limit).contains(&value) {
        return Err(ValidationError::new(
            field,
            Constraint::OutOfRange {
                min: -limit,
                max: limit,
                value,
            },
        ));
    }
    Ok(value)
}

/// Latitude in degrees, within [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Latitude(f64);

impl Latitude {
    pub fn new(degrees: f64) -> Result<Self, ValidationError> {
        check_range("latitude", degrees, 90.0).map(Self)
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Latitude {
    type Error = ValidationError;

    fn try_from(degrees: f64) -> Result<Self, Self::Error> {
        Self::new(degrees)
    }
}

impl From<Latitude> for f64 {
    fn from(latitude: Latitude) -> Self {
        latitude.0
    }
}

/// Longitude in degrees, within [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Longitude(f64);

impl Longitude {
    pub fn new(degrees: f64) -> Result<Self, ValidationError> {
        check_range("longitude", degrees, 180.0).map(Self)
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Longitude {
    type Error = ValidationError;

    fn try_from(degrees: f64) -> Result<Self, Self::Error> {
        Self::new(degrees)
    }
}

impl From<Longitude> for f64 {
    fn from(longitude: Longitude) -> Self {
        longitude.0
    }
}

/// A point on the map. Both coordinates are required and range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: Latitude,
    pub longitude: Longitude,
}

impl Location {
    /// Creates a location, rejecting out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            latitude: Latitude::new(latitude)?,
            longitude: Longitude::new(longitude)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_defaults_to_us() {
        let address = Address::new("123 Main St", "New York", "NY", "10001");
        assert_eq!(address.country, "US");
        assert_eq!(address.with_country("CA").country, "CA");
    }

    #[test]
    fn test_address_missing_country_deserializes_to_us() {
        let json = r#"{"street":"1 Elm","city":"Austin","state":"TX","zip_code":"73301"}"#;
        let address: Address = serde_json::from_str(json).unwrap();
        assert_eq!(address.country, "US");
    }

    #[test]
    fn test_address_requires_fields() {
        let json = r#"{"street":"1 Elm","city":"Austin","state":"TX"}"#;
        assert!(serde_json::from_str::<Address>(json).is_err());
    }

    #[test]
    fn test_location_preserves_values() {
        let location = Location::new(40.7128, -74.0060).unwrap();
        assert_eq!(location.latitude.degrees(), 40.7128);
        assert_eq!(location.longitude.degrees(), -74.0060);
    }

    #[test]
    fn test_location_accepts_boundaries() {
        for (lat, lon) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0)] {
            assert!(Location::new(lat, lon).is_ok(), "({lat}, {lon})");
        }
    }

    #[test]
    fn test_location_rejects_out_of_range() {
        let err = Location::new(91.0, 0.0).unwrap_err();
        assert_eq!(err.field(), "latitude");

        let err = Location::new(0.0, -180.5).unwrap_err();
        assert_eq!(err.field(), "longitude");

        let err = Location::new(f64::NAN, 0.0).unwrap_err();
        assert_eq!(err.constraint(), &Constraint::NotFinite);
    }

    #[test]
    fn test_location_deserialization_is_validated() {
        let ok: Location = serde_json::from_str(r#"{"latitude":40.7128,"longitude":-74.006}"#).unwrap();
        assert_eq!(ok, Location::new(40.7128, -74.006).unwrap());

        let err = serde_json::from_str::<Location>(r#"{"latitude":91,"longitude":0}"#).unwrap_err();
        assert!(err.to_string().contains("latitude"));
        assert!(serde_json::from_str::<Location>(r#"{"latitude":10}"#).is_err());
    }

    #[test]
    fn test_location_serializes_plain_numbers() {
        let json = serde_json::to_value(Location::new(40.7128, -74.006).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"latitude": 40.7128, "longitude": -74.006}));
    }
}
