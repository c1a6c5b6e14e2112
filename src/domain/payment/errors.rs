//! Payment-specific error types.
//!
//! Every failure the facade can report collapses to one of two contexts:
//! creating a payment or looking one up.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status | `error` field |
//! |-------|-------------|---------------|
//! | InvalidAmount | 500 | Failed to create payment |
//! | CreationFailed | 500 | Failed to create payment |
//! | LookupFailed | 500 | Failed to get payment status |

use thiserror::Error;

/// Context message for any failure while creating a payment.
pub const CREATION_FAILED_MESSAGE: &str = "Failed to create payment";

/// Context message for any failure while reading payment status.
pub const LOOKUP_FAILED_MESSAGE: &str = "Failed to get payment status";

/// Errors reported by the payment facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// The amount could not be normalized; the processor was never contacted.
    #[error("Invalid amount '{raw}': {reason}")]
    InvalidAmount { raw: String, reason: String },

    /// The processor refused or failed the creation call.
    #[error("{CREATION_FAILED_MESSAGE}: {details}")]
    CreationFailed { details: String },

    /// The processor lookup failed.
    #[error("{LOOKUP_FAILED_MESSAGE}: {details}")]
    LookupFailed { details: String },
}

impl PaymentError {
    pub fn invalid_amount(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        PaymentError::InvalidAmount {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    pub fn creation_failed(details: impl Into<String>) -> Self {
        PaymentError::CreationFailed {
            details: details.into(),
        }
    }

    pub fn lookup_failed(details: impl Into<String>) -> Self {
        PaymentError::LookupFailed {
            details: details.into(),
        }
    }

    /// The public context message (`error` field of the envelope).
    pub fn context(&self) -> &'static str {
        match self {
            PaymentError::InvalidAmount { .. } | PaymentError::CreationFailed { .. } => {
                CREATION_FAILED_MESSAGE
            }
            PaymentError::LookupFailed { .. } => LOOKUP_FAILED_MESSAGE,
        }
    }

    /// The underlying message (`details` field of the envelope).
    pub fn details(&self) -> String {
        match self {
            PaymentError::InvalidAmount { raw, reason } => {
                format!("Invalid amount '{}': {}", raw, reason)
            }
            PaymentError::CreationFailed { details } | PaymentError::LookupFailed { details } => {
                details.clone()
            }
        }
    }
}
