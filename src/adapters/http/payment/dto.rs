//! HTTP DTOs (Data Transfer Objects) for payment endpoints.
//!
//! These types define the JSON request/response structure for the payment API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::application::handlers::payment::{
    CreatePaymentCommand, CreatePaymentResult, PaymentStatusResult,
};
use crate::domain::payment::{PaymentError, PaymentMetadata};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a ticket payment.
///
/// Metadata fields sit flat at the top level, the way the checkout page posts them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    /// Amount as a string (`"25"`) or a JSON number (`25`).
    #[serde(default)]
    pub amount: Option<AmountInput>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub concert_date: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub ticket_type: Option<String>,
}

/// Amount as submitted by the client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Text(String),
    Number(serde_json::Number),
}

impl AmountInput {
    fn into_raw(self) -> String {
        match self {
            AmountInput::Text(s) => s,
            AmountInput::Number(n) => n.to_string(),
        }
    }
}

impl From<CreatePaymentRequest> for CreatePaymentCommand {
    fn from(req: CreatePaymentRequest) -> Self {
        Self {
            amount: req.amount.map(AmountInput::into_raw).unwrap_or_default(),
            description: req.description,
            redirect_url: req.redirect_url,
            metadata: PaymentMetadata {
                concert_date: req.concert_date,
                venue: req.venue,
                location: req.location,
                ticket_type: req.ticket_type,
            },
        }
    }
}

/// Body of a processor webhook notification.
///
/// Only the id is read. Anything that cannot be parsed is treated as a
/// notification without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WebhookNotification {
    #[serde(default)]
    pub id: Option<String>,
}

impl WebhookNotification {
    /// Parse a webhook body, picking the format from the content type.
    ///
    /// Mollie posts `application/x-www-form-urlencoded` (`id=tr_xxx`). JSON
    /// is accepted as well. Without a recognised content type, JSON is tried
    /// first and then form encoding.
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Self {
        let mime = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase());

        let parsed = match mime.as_deref() {
            Some("application/json") => Self::from_json(body),
            Some("application/x-www-form-urlencoded") => Self::from_form(body),
            _ => Self::from_json(body).or_else(|| Self::from_form(body)),
        };

        parsed.unwrap_or_default()
    }

    fn from_json(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }

    fn from_form(body: &[u8]) -> Option<Self> {
        serde_urlencoded::from_bytes(body).ok()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a created payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentResponse {
    pub checkout_url: String,
    pub payment_id: String,
}

impl From<CreatePaymentResult> for CreatePaymentResponse {
    fn from(result: CreatePaymentResult) -> Self {
        Self {
            checkout_url: result.checkout_url,
            payment_id: result.payment_id,
        }
    }
}

/// Response for a payment status lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentStatusResponse {
    /// Raw processor status string.
    pub status: String,
    pub success: bool,
}

impl From<PaymentStatusResult> for PaymentStatusResponse {
    fn from(result: PaymentStatusResult) -> Self {
        Self {
            status: result.status.as_str().to_string(),
            success: result.success,
        }
    }
}

/// Error envelope: a fixed context message plus the underlying details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

impl From<&PaymentError> for ErrorResponse {
    fn from(err: &PaymentError) -> Self {
        Self {
            error: err.context().to_string(),
            details: err.details(),
        }
    }
}
