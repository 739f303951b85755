//! Response envelopes shared by every service.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use common::{Constraint, ValidationError};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};

/// `error_code` used when a record failed validation.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

fn default_message() -> String {
    "Success".to_string()
}

fn default_success() -> bool {
    true
}

/// Reads a `success` flag that may only hold `expected`.
fn fixed_success<'de, D: Deserializer<'de>>(
    deserializer: D,
    expected: bool,
) -> Result<bool, D::Error> {
    let success = bool::deserialize(deserializer)?;
    if success != expected {
        let allowed: &'static [&'static str] = if expected { &["true"] } else { &["false"] };
        return Err(de::Error::custom(ValidationError::new(
            "success",
            Constraint::UnknownVariant {
                value: success.to_string(),
                expected: allowed,
            },
        )));
    }
    Ok(success)
}

fn success_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    fixed_success(deserializer, true)
}

fn success_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    fixed_success(deserializer, false)
}

/// Successful response wrapping an optional payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct BaseResponse<T = Value> {
    #[serde(default = "default_success", deserialize_with = "success_true")]
    pub success: bool,
    #[serde(default = "default_message")]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> BaseResponse<T> {
    /// Wraps `data` with the default `"Success"` message.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: default_message(),
            data: Some(data),
        }
    }

    /// Success without a payload.
    pub fn empty() -> Self {
        Self {
            success: true,
            message: default_message(),
            data: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl<T> Default for BaseResponse<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Failed response. `success` is always `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, deserialize_with = "success_false")]
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub details: Option<Map<String, Value>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error_code: None,
            details: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        ErrorResponse::new(err.to_string())
            .with_code(VALIDATION_ERROR)
            .with_detail("field", err.field())
            .with_detail("constraint", err.constraint().to_string())
    }
}

fn default_health_status() -> String {
    "healthy".to_string()
}

pub(crate) fn default_version() -> String {
    "1.0.0".to_string()
}

/// Body returned by liveness and readiness probes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub service: String,
    #[serde(default = "default_health_status")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default = "default_version")]
    pub version: String,
    /// Dependency name to its status, e.g. `"database" => "healthy"`.
    #[serde(default)]
    pub dependencies: Option<BTreeMap<String, String>>,
}

impl HealthCheck {
    /// A healthy report for `service`, stamped with the current time.
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            status: default_health_status(),
            timestamp: Utc::now(),
            version: default_version(),
            dependencies: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_dependency(mut self, name: impl Into<String>, status: impl Into<String>) -> Self {
        self.dependencies
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), status.into());
        self
    }
}
