//! Payment status as reported by the processor.
//!
//! The processor owns the lifecycle
//! (open -> pending -> paid | expired | failed | canceled). This service only
//! relays it, so no transitions are enforced here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Processor-reported payment status.
///
/// Unrecognized values are kept verbatim in `Unknown` so they can be relayed
/// to clients unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    /// Created, customer has not completed checkout.
    Open,

    /// Checkout finished, processor awaiting settlement.
    Pending,

    /// Funds reserved but not captured yet.
    Authorized,

    /// Payment completed.
    Paid,

    /// Customer never completed checkout in time.
    Expired,

    /// Payment could not be completed.
    Failed,

    /// Customer canceled the payment.
    Canceled,

    /// Any status this service does not know about.
    Unknown(String),
}

impl PaymentStatus {
    /// Parse a processor status string. Matching is exact and case-sensitive.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "open" => PaymentStatus::Open,
            "pending" => PaymentStatus::Pending,
            "authorized" => PaymentStatus::Authorized,
            "paid" => PaymentStatus::Paid,
            "expired" => PaymentStatus::Expired,
            "failed" => PaymentStatus::Failed,
            "canceled" => PaymentStatus::Canceled,
            other => PaymentStatus::Unknown(other.to_string()),
        }
    }

    /// The status string exactly as the processor reported it.
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Open => "open",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Authorized => "authorized",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Expired => "expired",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Canceled => "canceled",
            PaymentStatus::Unknown(raw) => raw,
        }
    }

    /// True only for `paid`. Every other status, known or not, is not a success.
    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }

    /// Returns true if the processor will not move this payment any further.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            PaymentStatus::Paid
                | PaymentStatus::Expired
                | PaymentStatus::Failed
                | PaymentStatus::Canceled
        )
    }
}

impl From<String> for PaymentStatus {
    fn from(raw: String) -> Self {
        PaymentStatus::parse(&raw)
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
