//! Inputs for the mutating operations of each service.
//!
//! Requests carry only caller-supplied fields. Ids and timestamps are
//! assigned by the service that handles them.

use chrono::{DateTime, Utc};
use common::{Money, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::address::{Address, Location};
use crate::delivery::Delivery;
use crate::notification::Notification;
use crate::order::{Order, OrderItem};
use crate::payment::{Payment, default_currency};
use crate::status::{NotificationType, OrderStatus};

/// Body of a create-order call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: i64,
    pub restaurant_id: i64,
    pub items: Vec<OrderItem>,
    pub delivery_address: Address,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

impl CreateOrderRequest {
    /// Builds a pending order for the total computed by the order service.
    pub fn into_order(self, total_amount: Money) -> Result<Order, ValidationError> {
        let mut order = Order::new(
            self.customer_id,
            self.restaurant_id,
            self.items,
            self.delivery_address,
            total_amount,
        )?;
        order.special_instructions = self.special_instructions;
        Ok(order)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
    #[serde(default)]
    pub estimated_delivery_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDeliveryRequest {
    pub order_id: i64,
    pub pickup_address: Address,
    pub delivery_address: Address,
    pub pickup_location: Location,
    pub delivery_location: Location,
}

impl CreateDeliveryRequest {
    pub fn into_delivery(self) -> Delivery {
        Delivery::new(
            self.order_id,
            self.pickup_address,
            self.delivery_address,
            self.pickup_location,
            self.delivery_location,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignDriverRequest {
    pub driver_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    pub order_id: i64,
    pub amount: Money,
    pub payment_method: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl CreatePaymentRequest {
    pub fn into_payment(self) -> Payment {
        Payment::new(self.order_id, self.amount, self.payment_method).with_currency(self.currency)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessPaymentRequest {
    pub payment_id: i64,
    pub transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendNotificationRequest {
    pub recipient_id: i64,
    pub recipient_type: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
}

impl SendNotificationRequest {
    pub fn into_notification(self) -> Notification {
        let mut notification = Notification::new(
            self.recipient_id,
            self.notification_type,
            self.title,
            self.message,
        )
        .with_recipient_type(self.recipient_type);
        notification.data = self.data;
        notification
    }
}
