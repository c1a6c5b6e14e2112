//! GetPaymentStatusHandler - Query handler for reading payment status.

use std::sync::Arc;

use crate::domain::payment::{PaymentError, PaymentStatus};
use crate::ports::PaymentProcessor;

/// Query for the current status of a payment.
#[derive(Debug, Clone)]
pub struct GetPaymentStatusQuery {
    /// Processor payment id, forwarded as-is.
    pub payment_id: String,
}

/// Payment status as reported by the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentStatusResult {
    pub status: PaymentStatus,

    /// True only when the payment is paid.
    pub success: bool,
}

impl From<PaymentStatus> for PaymentStatusResult {
    fn from(status: PaymentStatus) -> Self {
        Self {
            success: status.is_paid(),
            status,
        }
    }
}

/// Handler for payment status lookups.
pub struct GetPaymentStatusHandler {
    processor: Arc<dyn PaymentProcessor>,
}

impl GetPaymentStatusHandler {
    pub fn new(processor: Arc<dyn PaymentProcessor>) -> Self {
        Self { processor }
    }

    pub async fn handle(
        &self,
        query: GetPaymentStatusQuery,
    ) -> Result<PaymentStatusResult, PaymentError> {
        let payment = self
            .processor
            .get_payment(&query.payment_id)
            .await
            .map_err(|e| PaymentError::lookup_failed(e.message))?;

        Ok(PaymentStatusResult::from(payment.status))
    }
}
