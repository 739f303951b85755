//! Validation error raised when a record field breaks its constraint.

use thiserror::Error;

/// The constraint a rejected value failed to satisfy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Constraint {
    /// Value lies outside an inclusive range.
    #[error("must be between {min} and {max} (got {value})")]
    OutOfRange { min: f64, max: f64, value: f64 },

    /// Value must be strictly greater than zero.
    #[error("must be greater than 0 (got {value})")]
    NotPositive { value: String },

    /// Monetary value carries more than two fractional digits or is malformed.
    #[error("must be a decimal with at most 2 fractional digits (got {value:?})")]
    DecimalPlaces { value: String },

    /// NaN or infinity.
    #[error("must be a finite number")]
    NotFinite,

    /// Tag is not part of the closed set.
    #[error("unknown variant {value:?}, expected one of {}", .expected.join(", "))]
    UnknownVariant {
        value: String,
        expected: &'static [&'static str],
    },

    /// Value does not fit the underlying representation.
    #[error("value {value:?} is too large")]
    Overflow { value: String },
}

/// A record field that failed validation at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {constraint}")]
pub struct ValidationError {
    field: &'static str,
    constraint: Constraint,
}

impl ValidationError {
    /// Creates a validation error for `field`.
    ///
    /// Every rejection is logged at debug level and counted in the
    /// `schema_validation_failures_total` metric.
    pub fn new(field: &'static str, constraint: Constraint) -> Self {
        tracing::debug!(field, %constraint, "rejected record field");
        metrics::counter!("schema_validation_failures_total", "field" => field).increment(1);
        Self { field, constraint }
    }

    /// Relabels the error for the field the value was validated on behalf of.
    pub fn for_field(mut self, field: &'static str) -> Self {
        self.field = field;
        self
    }

    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The constraint that was broken.
    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }
}
