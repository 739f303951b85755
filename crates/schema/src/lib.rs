//! Record schema shared by the food-delivery services.
//!
//! This crate provides the wire shape and construction-time validation of
//! every record the services exchange:
//! - Closed status and notification tag sets
//! - Entities (orders, deliveries, payments, restaurants, notifications)
//! - Request bodies for the mutating operations
//! - Response envelopes and the health-check body
//!
//! Constrained fields are typed (`Latitude`, `Quantity`, `OrderTotal`, ...)
//! so a record that fails its rules cannot be constructed or deserialized.

pub mod address;
pub mod config;
pub mod delivery;
pub mod notification;
pub mod order;
pub mod payment;
pub mod request;
pub mod response;
pub mod restaurant;
pub mod status;

pub use address::{Address, Latitude, Location, Longitude};
pub use common::{Constraint, Money, ValidationError};
pub use config::ServiceConfig;
pub use delivery::Delivery;
pub use notification::{Notification, recipient};
pub use order::{Order, OrderItem, OrderTotal, Quantity};
pub use payment::Payment;
pub use request::{
    AssignDriverRequest, CreateDeliveryRequest, CreateOrderRequest, CreatePaymentRequest,
    ProcessPaymentRequest, SendNotificationRequest, UpdateOrderStatusRequest,
};
pub use response::{BaseResponse, ErrorResponse, HealthCheck, VALIDATION_ERROR};
pub use restaurant::{MenuItem, Rating, Restaurant};
pub use status::{DeliveryStatus, NotificationType, OrderStatus, PaymentStatus};
