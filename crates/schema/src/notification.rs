//! Notification records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::status::NotificationType;

/// Conventional `recipient_type` values. The field itself is free-form.
pub mod recipient {
    pub const CUSTOMER: &str = "customer";
    pub const RESTAURANT: &str = "restaurant";
    pub const DRIVER: &str = "driver";
}

pub(crate) fn default_recipient_type() -> String {
    recipient::CUSTOMER.to_string()
}

/// A message addressed to a customer, restaurant or driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub id: Option<i64>,
    pub recipient_id: i64,
    #[serde(default = "default_recipient_type")]
    pub recipient_type: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Creates an unsent notification for a customer.
    pub fn new(
        recipient_id: i64,
        notification_type: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            recipient_id,
            recipient_type: default_recipient_type(),
            notification_type,
            title: title.into(),
            message: message.into(),
            data: None,
            sent_at: None,
            read_at: None,
        }
    }

    pub fn with_recipient_type(mut self, recipient_type: impl Into<String>) -> Self {
        self.recipient_type = recipient_type.into();
        self
    }

    /// Adds one entry to the structured payload.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_sent_at(mut self, at: DateTime<Utc>) -> Self {
        self.sent_at = Some(at);
        self
    }

    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}
