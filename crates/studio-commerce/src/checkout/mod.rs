//! Checkout module.
//!
//! A single-form checkout: validate the customer's details, simulate the
//! payment, book an order summary, clear the cart.

mod form;
mod order;
mod submit;

pub use form::{CheckoutForm, FieldError, PaymentMethod};
pub use order::{Order, OrderLineItem};
pub use submit::submit_order;
