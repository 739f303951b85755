//! Closed sets of lifecycle and notification tags.
//!
//! These are value sets only. Which transitions are legal is decided by the
//! service that owns the record.

use std::fmt;
use std::str::FromStr;

use common::{Constraint, ValidationError};
use serde::{Deserialize, Serialize};

/// Implements `ALL`, `as_str`, `Display` and `FromStr` for a tag enum.
///
/// `$field` is the record field reported when parsing fails.
macro_rules! closed_set {
    ($ty:ident, $field:literal, { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $ty {
            /// Every tag in the set, in lifecycle order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            const TAGS: &'static [&'static str] = &[$($tag),+];

            /// Returns the wire tag.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $tag),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($ty::$variant),)+
                    other => Err(ValidationError::new(
                        $field,
                        Constraint::UnknownVariant {
                            value: other.to_string(),
                            expected: Self::TAGS,
                        },
                    )),
                }
            }
        }
    };
}

/// The state of an order.
///
/// ```text
/// Pending ──► Confirmed ──► Preparing ──► Ready ──► PickedUp ──► Delivered
///    │            │             │           │          │
///    └────────────┴─────────────┴───────────┴──────────┴──► Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    PickedUp,
    Delivered,
    Cancelled,
}

closed_set!(OrderStatus, "status", {
    Pending => "PENDING",
    Confirmed => "CONFIRMED",
    Preparing => "PREPARING",
    Ready => "READY",
    PickedUp => "PICKED_UP",
    Delivered => "DELIVERED",
    Cancelled => "CANCELLED",
});

impl OrderStatus {
    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// The state of a delivery.
///
/// ```text
/// Pending ──► Assigned ──► PickedUp ──► InTransit ──► Delivered
///    │           │            │            │
///    └───────────┴────────────┴────────────┴──► Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    #[default]
    Pending,
    Assigned,
    PickedUp,
    InTransit,
    Delivered,
    Cancelled,
}

closed_set!(DeliveryStatus, "status", {
    Pending => "PENDING",
    Assigned => "ASSIGNED",
    PickedUp => "PICKED_UP",
    InTransit => "IN_TRANSIT",
    Delivered => "DELIVERED",
    Cancelled => "CANCELLED",
});

impl DeliveryStatus {
    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeliveryStatus::Delivered | DeliveryStatus::Cancelled)
    }
}

/// The state of a payment.
///
/// ```text
/// Pending ──► Processing ──► Completed ──► Refunded
///    │            │
///    └────────────┴──► Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
    Refunded,
}

closed_set!(PaymentStatus, "payment_status", {
    Pending => "PENDING",
    Processing => "PROCESSING",
    Completed => "COMPLETED",
    Failed => "FAILED",
    Refunded => "REFUNDED",
});

impl PaymentStatus {
    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Failed | PaymentStatus::Refunded)
    }
}

/// Kind of notification sent to a recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    OrderConfirmation,
    OrderReady,
    DeliveryAssigned,
    DeliveryPickedUp,
    DeliveryCompleted,
    PaymentConfirmation,
}

closed_set!(NotificationType, "type", {
    OrderConfirmation => "ORDER_CONFIRMATION",
    OrderReady => "ORDER_READY",
    DeliveryAssigned => "DELIVERY_ASSIGNED",
    DeliveryPickedUp => "DELIVERY_PICKED_UP",
    DeliveryCompleted => "DELIVERY_COMPLETED",
    PaymentConfirmation => "PAYMENT_CONFIRMATION",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_statuses_are_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        assert_eq!(DeliveryStatus::default(), DeliveryStatus::Pending);
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
    }

    #[test]
    fn test_from_str_accepts_every_tag() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), *status);
        }
        for status in DeliveryStatus::ALL {
            assert_eq!(status.as_str().parse::<DeliveryStatus>().unwrap(), *status);
        }
        for status in PaymentStatus::ALL {
            assert_eq!(status.as_str().parse::<PaymentStatus>().unwrap(), *status);
        }
        assert_eq!(NotificationType::ALL.len(), 6);
        for kind in NotificationType::ALL {
            assert_eq!(kind.as_str().parse::<NotificationType>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_tag() {
        let err = "SHIPPED".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.field(), "status");
        assert!(matches!(
            err.constraint(),
            Constraint::UnknownVariant { value, .. } if value == "SHIPPED"
        ));

        assert!("pending".parse::<OrderStatus>().is_err());
        assert_eq!(
            "CHARGEBACK".parse::<PaymentStatus>().unwrap_err().field(),
            "payment_status"
        );
    }

    #[test]
    fn test_serde_uses_literal_tags() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::PickedUp).unwrap(),
            "\"PICKED_UP\""
        );
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::InTransit).unwrap(),
            "\"IN_TRANSIT\""
        );
        assert_eq!(
            serde_json::to_string(&NotificationType::PaymentConfirmation).unwrap(),
            "\"PAYMENT_CONFIRMATION\""
        );
        assert!(serde_json::from_str::<OrderStatus>("\"SHIPPED\"").is_err());
    }

    #[test]
    fn test_display_matches_wire_tag() {
        for status in OrderStatus::ALL {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Ready.is_terminal());
        assert!(DeliveryStatus::Cancelled.is_terminal());
        assert!(!DeliveryStatus::InTransit.is_terminal());
        assert!(PaymentStatus::Refunded.is_terminal());
        assert!(!PaymentStatus::Completed.is_terminal());
    }
}
