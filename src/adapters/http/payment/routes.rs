//! Axum router configuration for payment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_payment, get_payment_status, handle_webhook, PaymentAppState};

/// Create the payment API routes.
///
/// # Routes
/// - `POST /create-payment` - Create a payment
/// - `GET /payment-status/:id` - Get payment status
/// - `POST /webhook` - Processor notifications (unauthenticated, always 200)
pub fn payment_routes() -> Router<PaymentAppState> {
    Router::new()
        .route("/create-payment", post(create_payment))
        .route("/payment-status/:id", get(get_payment_status))
        .route("/webhook", post(handle_webhook))
}

/// Create the payment module router, mounted under `/api`.
///
/// # Example
///
/// ```ignore
/// let app = payment_router().with_state(PaymentAppState::new(processor, webhook_url));
/// ```
pub fn payment_router() -> Router<PaymentAppState> {
    Router::new().nest("/api", payment_routes())
}
