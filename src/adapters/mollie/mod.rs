//! Mollie payment processor adapter.
//!
//! Implements the `PaymentProcessor` port for Mollie, including:
//! - Payment creation with hosted checkout
//! - Payment status lookup
//!
//! Mollie webhooks are unsigned and carry only a payment id, so there is
//! nothing to verify here: the id is always re-fetched through this adapter.
//!
//! # Configuration
//!
//! Required environment variables:
//! - `TICKET_CHECKOUT__PROCESSOR__MOLLIE_API_KEY`: Mollie API key (test_... or live_...)

mod api_types;
mod mock_payment_processor;
mod mollie_adapter;

pub use mock_payment_processor::{MethodCall, MockPaymentProcessor};
pub use mollie_adapter::{MollieAdapter, MollieConfig, DEFAULT_API_BASE_URL};
