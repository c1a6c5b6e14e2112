//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API
//! - `mollie` - Mollie payment processor (plus an in-memory mock)

pub mod http;
pub mod mollie;

pub use http::{build_app, PaymentAppState};
pub use mollie::{MockPaymentProcessor, MollieAdapter, MollieConfig};
