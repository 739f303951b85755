//! Order records and their embedded line items.

use chrono::{DateTime, Utc};
use common::{Constraint, Money, ValidationError};
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::status::OrderStatus;

/// Number of units on a line item. Always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(quantity: i64) -> Result<Self, ValidationError> {
        if quantity <= 0 {
            return Err(ValidationError::new(
                "quantity",
                Constraint::NotPositive {
                    value: quantity.to_string(),
                },
            ));
        }
        u32::try_from(quantity).map(Self).map_err(|_| {
            ValidationError::new(
                "quantity",
                Constraint::Overflow {
                    value: quantity.to_string(),
                },
            )
        })
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = ValidationError;

    fn try_from(quantity: i64) -> Result<Self, Self::Error> {
        Self::new(quantity)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

/// A line of an order, embedded in the order rather than referenced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: i64,
    pub quantity: Quantity,
    #[serde(default)]
    pub special_instructions: Option<String>,
    pub unit_price: Money,
}

impl OrderItem {
    /// Creates a line item, rejecting a non-positive quantity.
    pub fn new(menu_item_id: i64, quantity: i64, unit_price: Money) -> Result<Self, ValidationError> {
        Ok(Self {
            menu_item_id,
            quantity: Quantity::new(quantity)?,
            special_instructions: None,
            unit_price,
        })
    }

    pub fn with_special_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.special_instructions = Some(instructions.into());
        self
    }

    /// Returns unit_price * quantity.
    pub fn subtotal(&self) -> Result<Money, ValidationError> {
        self.unit_price
            .checked_multiply(self.quantity.get())
            .ok_or_else(|| {
                ValidationError::new(
                    "subtotal",
                    Constraint::Overflow {
                        value: format!("{} x {}", self.unit_price, self.quantity.get()),
                    },
                )
            })
    }
}

/// The amount charged for an order. Always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Money", into = "Money")]
pub struct OrderTotal(Money);

impl OrderTotal {
    pub fn new(amount: Money) -> Result<Self, ValidationError> {
        if !amount.is_positive() {
            return Err(ValidationError::new(
                "total_amount",
                Constraint::NotPositive {
                    value: amount.to_string(),
                },
            ));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Money {
        self.0
    }
}

impl TryFrom<Money> for OrderTotal {
    type Error = ValidationError;

    fn try_from(amount: Money) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<OrderTotal> for Money {
    fn from(total: OrderTotal) -> Self {
        total.0
    }
}

/// A customer order as exchanged between services.
///
/// `total_amount` is taken as supplied; it is not reconciled against the
/// item subtotals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: Option<i64>,
    pub customer_id: i64,
    pub restaurant_id: i64,
    pub items: Vec<OrderItem>,
    pub delivery_address: Address,
    pub total_amount: OrderTotal,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub estimated_delivery_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

impl Order {
    /// Creates a pending order, rejecting a non-positive total.
    pub fn new(
        customer_id: i64,
        restaurant_id: i64,
        items: Vec<OrderItem>,
        delivery_address: Address,
        total_amount: Money,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            customer_id,
            restaurant_id,
            items,
            delivery_address,
            total_amount: OrderTotal::new(total_amount)?,
            status: OrderStatus::default(),
            created_at: None,
            updated_at: None,
            estimated_delivery_time: None,
            special_instructions: None,
        })
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the status from a wire tag, rejecting tags outside the closed set.
    pub fn with_status_tag(self, tag: &str) -> Result<Self, ValidationError> {
        Ok(self.with_status(tag.parse()?))
    }

    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self.updated_at = Some(updated_at);
        self
    }

    pub fn with_estimated_delivery_time(mut self, at: DateTime<Utc>) -> Self {
        self.estimated_delivery_time = Some(at);
        self
    }

    pub fn with_special_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.special_instructions = Some(instructions.into());
        self
    }

    /// Sum of the item subtotals. Informational only.
    pub fn items_subtotal(&self) -> Result<Money, ValidationError> {
        self.items.iter().try_fold(Money::zero(), |acc, item| {
            let subtotal = item.subtotal()?;
            acc.checked_add(subtotal).ok_or_else(|| {
                ValidationError::new(
                    "items_subtotal",
                    Constraint::Overflow {
                        value: format!("{acc} + {subtotal}"),
                    },
                )
            })
        })
    }
}
