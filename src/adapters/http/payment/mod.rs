//! HTTP adapter for payment endpoints.
//!
//! Exposes the payment facade via REST API:
//! - `POST /api/create-payment` - Create a payment, returns checkout URL and id
//! - `GET /api/payment-status/:id` - Get processor status of a payment
//! - `POST /api/webhook` - Handle Mollie webhooks

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{PaymentApiError, PaymentAppState};
pub use routes::{payment_router, payment_routes};
