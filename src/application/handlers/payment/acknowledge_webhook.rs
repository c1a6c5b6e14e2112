//! AcknowledgeWebhookHandler - Command handler for processor notifications.
//!
//! Mollie notifications carry nothing but a payment id. The status is always
//! re-read from the processor; the notification body itself is never trusted.
//! Whatever happens here, the caller answers `200 OK`, so this handler
//! reports an outcome instead of an error.

use std::sync::Arc;

use crate::domain::payment::PaymentStatus;
use crate::ports::PaymentProcessor;

/// Command carrying the (possibly absent) id from a webhook body.
#[derive(Debug, Clone, Default)]
pub struct AcknowledgeWebhookCommand {
    pub payment_id: Option<String>,
}

/// What happened while handling a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookAcknowledgement {
    /// Status re-fetched from the processor.
    StatusFetched {
        payment_id: String,
        status: PaymentStatus,
    },
    /// The processor lookup failed; the notification is still acknowledged.
    FetchFailed { payment_id: String, details: String },
    /// No usable id in the notification.
    MissingId,
}

/// Handler for processor webhook notifications.
pub struct AcknowledgeWebhookHandler {
    processor: Arc<dyn PaymentProcessor>,
}

impl AcknowledgeWebhookHandler {
    pub fn new(processor: Arc<dyn PaymentProcessor>) -> Self {
        Self { processor }
    }

    pub async fn handle(&self, cmd: AcknowledgeWebhookCommand) -> WebhookAcknowledgement {
        let payment_id = match cmd.payment_id.filter(|id| !id.trim().is_empty()) {
            Some(id) => id,
            None => {
                tracing::warn!("Webhook received without payment id");
                return WebhookAcknowledgement::MissingId;
            }
        };

        match self.processor.get_payment(&payment_id).await {
            Ok(payment) => {
                tracing::info!(
                    payment_id = %payment_id,
                    status = %payment.status,
                    is_final = payment.status.is_final(),
                    "Webhook: payment status updated"
                );
                WebhookAcknowledgement::StatusFetched {
                    payment_id,
                    status: payment.status,
                }
            }
            Err(e) => {
                tracing::error!(
                    payment_id = %payment_id,
                    error = %e,
                    "Webhook: failed to fetch payment status"
                );
                WebhookAcknowledgement::FetchFailed {
                    payment_id,
                    details: e.message,
                }
            }
        }
    }
}
