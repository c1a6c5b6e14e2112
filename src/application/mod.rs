//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (create, acknowledge) are kept apart from query handlers (status).

pub mod handlers;

pub use handlers::{
    AcknowledgeWebhookCommand, AcknowledgeWebhookHandler, CreatePaymentCommand,
    CreatePaymentHandler, CreatePaymentResult, GetPaymentStatusHandler, GetPaymentStatusQuery,
    PaymentStatusResult, WebhookAcknowledgement,
};
