//! Payment handlers.
//!
//! ## Commands
//! - Creating a payment and obtaining its checkout page
//! - Acknowledging processor webhooks
//!
//! ## Queries
//! - Get payment status

mod acknowledge_webhook;
mod create_payment;
mod get_payment_status;

// Commands
pub use acknowledge_webhook::{
    AcknowledgeWebhookCommand, AcknowledgeWebhookHandler, WebhookAcknowledgement,
};
pub use create_payment::{
    CreatePaymentCommand, CreatePaymentHandler, CreatePaymentResult, MISSING_CHECKOUT_URL,
};

// Queries
pub use get_payment_status::{GetPaymentStatusHandler, GetPaymentStatusQuery, PaymentStatusResult};
