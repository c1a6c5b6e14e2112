//! Payment processor port for external payment processing.
//!
//! Defines the contract for the third-party processor (e.g., Mollie) that
//! issues checkout pages and tracks payment status.
//!
//! # Design
//!
//! - **Processor owns state**: this service never stores or mutates payments
//! - **Single call**: each operation is one request/response, never retried
//! - **Opaque ids**: payment ids are forwarded exactly as received

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::payment::{Amount, Currency, PaymentMetadata, PaymentStatus};

/// Port for payment processor integrations.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Create a payment and obtain its checkout page.
    async fn create_payment(
        &self,
        request: CreatePaymentRequest,
    ) -> Result<ProcessorPayment, ProcessorError>;

    /// Fetch the current state of a payment by processor id.
    async fn get_payment(&self, payment_id: &str) -> Result<ProcessorPayment, ProcessorError>;
}

/// Amount with its currency, as the processor expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub currency: Currency,

    /// Decimal string with exactly two fraction digits.
    pub value: String,
}

impl Money {
    /// Euro amount from a normalized `Amount`.
    pub fn eur(amount: Amount) -> Self {
        Self {
            currency: Currency::Eur,
            value: amount.to_processor_value(),
        }
    }
}

/// Request to create a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    pub amount: Money,

    /// Shown to the customer on the checkout page.
    pub description: Option<String>,

    /// Where the customer lands after checkout.
    pub redirect_url: Option<String>,

    /// Where the processor delivers status-change notifications.
    pub webhook_url: Option<String>,

    pub metadata: PaymentMetadata,
}

/// A payment as seen by the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorPayment {
    /// Processor-assigned id (e.g., `tr_WDqYK6vllg`).
    pub id: String,

    pub status: PaymentStatus,

    /// Hosted checkout page. Only present while the payment can still be paid.
    pub checkout_url: Option<String>,
}

/// Errors from payment processor operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ProcessorError {
    /// Error category.
    pub code: ProcessorErrorCode,

    /// Human-readable message, taken from the processor where possible.
    pub message: String,

    /// HTTP status returned by the processor, if a response was received.
    pub http_status: Option<u16>,
}

impl ProcessorError {
    /// Create a new processor error.
    pub fn new(code: ProcessorErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            http_status: None,
        }
    }

    /// Attach the HTTP status of the processor response.
    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ProcessorErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ProcessorErrorCode::AuthenticationError, message)
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ProcessorErrorCode::NotFound, message)
    }

    /// Create a validation rejection error.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(ProcessorErrorCode::Rejected, message)
    }

    /// Create a generic provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(ProcessorErrorCode::ProviderError, message)
    }
}

/// Processor error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorErrorCode {
    /// Could not reach the processor.
    NetworkError,

    /// API key missing, invalid or not allowed.
    AuthenticationError,

    /// Unknown payment id.
    NotFound,

    /// Processor refused the request (invalid amount, URL, ...).
    Rejected,

    /// Processor failed or answered with something unreadable.
    ProviderError,
}

impl std::fmt::Display for ProcessorErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProcessorErrorCode::NetworkError => "network_error",
            ProcessorErrorCode::AuthenticationError => "authentication_error",
            ProcessorErrorCode::NotFound => "not_found",
            ProcessorErrorCode::Rejected => "rejected",
            ProcessorErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}
