//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod payment;

pub use payment::{
    AcknowledgeWebhookCommand, AcknowledgeWebhookHandler, CreatePaymentCommand,
    CreatePaymentHandler, CreatePaymentResult, GetPaymentStatusHandler, GetPaymentStatusQuery,
    PaymentStatusResult, WebhookAcknowledgement,
};
