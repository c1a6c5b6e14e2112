//! CreatePaymentHandler - Command handler for starting a ticket checkout.

use std::sync::Arc;

use crate::domain::payment::{Amount, PaymentError, PaymentMetadata};
use crate::ports::{CreatePaymentRequest, Money, PaymentProcessor};

/// Details reported when the processor answers without a checkout page.
pub const MISSING_CHECKOUT_URL: &str = "processor response did not include a checkout URL";

/// Command to create a payment at the processor.
#[derive(Debug, Clone, Default)]
pub struct CreatePaymentCommand {
    /// Raw amount as submitted by the client.
    pub amount: String,
    pub description: Option<String>,
    pub redirect_url: Option<String>,
    pub metadata: PaymentMetadata,
}

/// Result of a successful payment creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePaymentResult {
    pub payment_id: String,
    pub checkout_url: String,
}

/// Handler for creating payments.
///
/// The amount is normalized locally; everything else is handed to the
/// processor untouched. The configured webhook URL is attached to every
/// request so the processor can report status changes back.
pub struct CreatePaymentHandler {
    processor: Arc<dyn PaymentProcessor>,
    webhook_url: Option<String>,
}

impl CreatePaymentHandler {
    pub fn new(processor: Arc<dyn PaymentProcessor>, webhook_url: Option<String>) -> Self {
        Self {
            processor,
            webhook_url,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreatePaymentCommand,
    ) -> Result<CreatePaymentResult, PaymentError> {
        // 1. Normalize amount before touching the processor
        let amount = Amount::parse(&cmd.amount)?;

        // 2. Single processor call, no retry
        let payment = self
            .processor
            .create_payment(CreatePaymentRequest {
                amount: Money::eur(amount),
                description: cmd.description,
                redirect_url: cmd.redirect_url,
                webhook_url: self.webhook_url.clone(),
                metadata: cmd.metadata,
            })
            .await
            .map_err(|e| PaymentError::creation_failed(e.message))?;

        // 3. A payment nobody can pay is useless to the caller
        let checkout_url = payment
            .checkout_url
            .ok_or_else(|| PaymentError::creation_failed(MISSING_CHECKOUT_URL))?;

        tracing::info!(
            payment_id = %payment.id,
            amount = %amount,
            status = %payment.status,
            "Payment created"
        );

        Ok(CreatePaymentResult {
            payment_id: payment.id,
            checkout_url,
        })
    }
}
