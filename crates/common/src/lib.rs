//! Shared building blocks for the food-delivery record schema.
//!
//! - [`ValidationError`] and [`Constraint`], the single error kind raised
//!   when a record is constructed with an out-of-contract value
//! - [`Money`], a fixed two-decimal amount that serializes as `"25.98"`

pub mod error;
pub mod money;

pub use error::{Constraint, ValidationError};
pub use money::Money;
