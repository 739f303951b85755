//! Payment records.

use chrono::{DateTime, Utc};
use common::Money;
use serde::{Deserialize, Serialize};

use crate::status::PaymentStatus;

pub(crate) fn default_currency() -> String {
    "USD".to_string()
}

/// A charge against an order, linked to it by `order_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default)]
    pub id: Option<i64>,
    pub order_id: i64,
    pub amount: Money,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub payment_method: String,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
}

impl Payment {
    /// Creates a pending USD payment.
    pub fn new(order_id: i64, amount: Money, payment_method: impl Into<String>) -> Self {
        Self {
            id: None,
            order_id,
            amount,
            currency: default_currency(),
            payment_method: payment_method.into(),
            payment_status: PaymentStatus::default(),
            transaction_id: None,
            created_at: None,
            processed_at: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = status;
        self
    }

    pub fn with_transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }
}
