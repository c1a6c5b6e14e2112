//! HTTP handlers for payment endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::payment::{
    AcknowledgeWebhookCommand, AcknowledgeWebhookHandler, CreatePaymentCommand,
    CreatePaymentHandler, GetPaymentStatusHandler, GetPaymentStatusQuery,
};
use crate::domain::payment::PaymentError;
use crate::ports::PaymentProcessor;

use super::dto::{
    CreatePaymentRequest, CreatePaymentResponse, ErrorResponse, PaymentStatusResponse,
    WebhookNotification,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state.
///
/// The processor client is built once at startup and shared by every request.
#[derive(Clone)]
pub struct PaymentAppState {
    pub payment_processor: Arc<dyn PaymentProcessor>,

    /// Webhook URL attached to every created payment.
    pub webhook_url: Option<String>,
}

impl PaymentAppState {
    pub fn new(payment_processor: Arc<dyn PaymentProcessor>, webhook_url: Option<String>) -> Self {
        Self {
            payment_processor,
            webhook_url,
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn create_payment_handler(&self) -> CreatePaymentHandler {
        CreatePaymentHandler::new(self.payment_processor.clone(), self.webhook_url.clone())
    }

    pub fn payment_status_handler(&self) -> GetPaymentStatusHandler {
        GetPaymentStatusHandler::new(self.payment_processor.clone())
    }

    pub fn webhook_handler(&self) -> AcknowledgeWebhookHandler {
        AcknowledgeWebhookHandler::new(self.payment_processor.clone())
    }
}

/// Largest webhook body that is read. Mollie sends a few dozen bytes.
const WEBHOOK_BODY_LIMIT: usize = 64 * 1024;

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/create-payment - Create a payment and return its checkout URL
pub async fn create_payment(
    State(state): State<PaymentAppState>,
    request: Result<Json<CreatePaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PaymentApiError> {
    // Unreadable bodies share the creation failure envelope
    let Json(request) =
        request.map_err(|rejection| PaymentError::creation_failed(rejection.body_text()))?;

    let handler = state.create_payment_handler();
    let cmd = CreatePaymentCommand::from(request);

    let result = handler.handle(cmd).await?;

    Ok(Json(CreatePaymentResponse::from(result)))
}

/// POST /api/webhook - Acknowledge a processor notification
///
/// Always answers `200 OK`, whatever the body or the lookup outcome. Bodies
/// that are too large or cannot be read count as a notification without id.
pub async fn handle_webhook(
    State(state): State<PaymentAppState>,
    headers: HeaderMap,
    body: Body,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let notification = match axum::body::to_bytes(body, WEBHOOK_BODY_LIMIT).await {
        Ok(bytes) => WebhookNotification::from_body(content_type, &bytes),
        Err(e) => {
            tracing::warn!(error = %e, "Webhook body could not be read");
            WebhookNotification::default()
        }
    };

    let handler = state.webhook_handler();
    handler
        .handle(AcknowledgeWebhookCommand {
            payment_id: notification.id,
        })
        .await;

    (StatusCode::OK, "OK")
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/payment-status/:id - Get the processor status of a payment
pub async fn get_payment_status(
    State(state): State<PaymentAppState>,
    Path(payment_id): Path<String>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let handler = state.payment_status_handler();
    let query = GetPaymentStatusQuery { payment_id };

    let result = handler.handle(query).await?;

    Ok(Json(PaymentStatusResponse::from(result)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts payment errors to HTTP responses.
///
/// Every failure is a `500` with `{error, details}`; the `error` field only
/// says which operation failed.
#[derive(Debug)]
pub struct PaymentApiError(PaymentError);

impl From<PaymentError> for PaymentApiError {
    fn from(err: PaymentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self.0, "{}", self.0.context());

        let body = ErrorResponse::from(&self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
