//! Delivery records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::address::{Address, Location};
use crate::status::DeliveryStatus;

/// The courier leg of an order, linked to it by `order_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    #[serde(default)]
    pub id: Option<i64>,
    pub order_id: i64,
    #[serde(default)]
    pub driver_id: Option<i64>,
    pub pickup_address: Address,
    pub delivery_address: Address,
    pub pickup_location: Location,
    pub delivery_location: Location,
    #[serde(default)]
    pub status: DeliveryStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pickup_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub delivery_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub estimated_delivery_time: Option<DateTime<Utc>>,
}

impl Delivery {
    /// Creates a pending, unassigned delivery.
    pub fn new(
        order_id: i64,
        pickup_address: Address,
        delivery_address: Address,
        pickup_location: Location,
        delivery_location: Location,
    ) -> Self {
        Self {
            id: None,
            order_id,
            driver_id: None,
            pickup_address,
            delivery_address,
            pickup_location,
            delivery_location,
            status: DeliveryStatus::default(),
            created_at: None,
            pickup_time: None,
            delivery_time: None,
            estimated_delivery_time: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_driver(mut self, driver_id: i64) -> Self {
        self.driver_id = Some(driver_id);
        self
    }

    pub fn with_status(mut self, status: DeliveryStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_estimated_delivery_time(mut self, at: DateTime<Utc>) -> Self {
        self.estimated_delivery_time = Some(at);
        self
    }
}
