//! Integration tests for payment HTTP endpoints.
//!
//! These tests drive the fully assembled router with an in-memory processor:
//! 1. Create payment normalizes the amount and returns checkout details
//! 2. Payment status reports `success` only for paid payments
//! 3. The webhook always answers `200 OK`
//! 4. Failures use the `{error, details}` envelope

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use ticket_checkout::adapters::http::{build_app, PaymentAppState};
use ticket_checkout::adapters::mollie::MockPaymentProcessor;
use ticket_checkout::config::ServerConfig;
use ticket_checkout::domain::payment::PaymentStatus;
use ticket_checkout::ports::{ProcessorError, ProcessorPayment};

// =============================================================================
// Test Infrastructure
// =============================================================================

const WEBHOOK_URL: &str = "https://tickets.example/api/webhook";

fn app(mock: &MockPaymentProcessor) -> Router {
    let state = PaymentAppState::new(Arc::new(mock.clone()), Some(WEBHOOK_URL.to_string()));
    build_app(state, &ServerConfig::default())
}

fn create_payment_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/create-payment")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn status_request(id: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/payment-status/{}", id))
        .body(Body::empty())
        .unwrap()
}

fn webhook_request(content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/webhook")
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn read_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// Create Payment
// =============================================================================

#[tokio::test]
async fn create_payment_example_returns_checkout_and_id() {
    let mock = MockPaymentProcessor::new();
    mock.set_next_payment(ProcessorPayment {
        id: "tr_WDqYK6vllg".to_string(),
        status: PaymentStatus::Open,
        checkout_url: Some("https://www.mollie.com/checkout/select-method/tr_WDqYK6vllg".to_string()),
    });

    let response = app(&mock)
        .oneshot(create_payment_request(json!({
            "amount": "25",
            "description": "Ticket",
            "redirectUrl": "https://x/thanks",
            "concertDate": "2024-05-01",
            "venue": "Hall",
            "location": "City",
            "ticketType": "VIP"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({
            "checkoutUrl": "https://www.mollie.com/checkout/select-method/tr_WDqYK6vllg",
            "paymentId": "tr_WDqYK6vllg"
        })
    );

    let sent = mock.last_create_request().unwrap();
    assert_eq!(sent.amount.currency.code(), "EUR");
    assert_eq!(sent.amount.value, "25.00");
    assert_eq!(sent.description.as_deref(), Some("Ticket"));
    assert_eq!(sent.redirect_url.as_deref(), Some("https://x/thanks"));
    assert_eq!(sent.webhook_url.as_deref(), Some(WEBHOOK_URL));
    assert_eq!(sent.metadata.concert_date.as_deref(), Some("2024-05-01"));
    assert_eq!(sent.metadata.venue.as_deref(), Some("Hall"));
    assert_eq!(sent.metadata.location.as_deref(), Some("City"));
    assert_eq!(sent.metadata.ticket_type.as_deref(), Some("VIP"));
}

#[tokio::test]
async fn amounts_are_sent_with_two_decimals() {
    let cases = [
        (json!("10"), "10.00"),
        (json!("10.005"), "10.01"),
        (json!("0.1"), "0.10"),
        (json!(" 7.5 "), "7.50"),
        (json!(12), "12.00"),
        (json!(3.456), "3.46"),
    ];

    for (amount, expected) in cases {
        let mock = MockPaymentProcessor::new();
        let response = app(&mock)
            .oneshot(create_payment_request(json!({ "amount": amount })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "amount {}", amount);
        assert_eq!(mock.last_create_request().unwrap().amount.value, expected);
    }
}

#[tokio::test]
async fn processor_failure_returns_error_envelope() {
    let mock = MockPaymentProcessor::new();
    mock.set_method_error(
        "create_payment",
        ProcessorError::rejected("The amount is lower than the minimum").with_http_status(422),
    );

    let response = app(&mock)
        .oneshot(create_payment_request(json!({ "amount": "0.01" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        read_json(response).await,
        json!({
            "error": "Failed to create payment",
            "details": "The amount is lower than the minimum"
        })
    );
    assert_eq!(mock.call_count("create_payment"), 1);
}

#[tokio::test]
async fn invalid_amount_returns_error_envelope_without_processor_call() {
    let mock = MockPaymentProcessor::new();

    let response = app(&mock)
        .oneshot(create_payment_request(json!({ "amount": "twenty" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Failed to create payment");
    assert!(body["details"].as_str().unwrap().contains("twenty"));
    assert!(!mock.was_called("create_payment"));
}

#[tokio::test]
async fn digit_separators_in_amount_are_rejected() {
    let mock = MockPaymentProcessor::new();

    let response = app(&mock)
        .oneshot(create_payment_request(json!({ "amount": "1_000" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(read_json(response).await["error"], "Failed to create payment");
    assert!(!mock.was_called("create_payment"));
}

#[tokio::test]
async fn concurrent_creates_are_independent() {
    let mock = MockPaymentProcessor::new();
    let app = app(&mock);

    let requests = (1..=10).map(|i| {
        let app = app.clone();
        async move {
            let response = app
                .oneshot(create_payment_request(json!({
                    "amount": format!("{}", i),
                    "venue": format!("Hall {}", i)
                })))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            read_json(response).await
        }
    });

    let bodies = futures::future::join_all(requests).await;

    let mut ids: Vec<String> = bodies
        .iter()
        .map(|b| b["paymentId"].as_str().unwrap().to_string())
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10);

    let mut values: Vec<String> = mock
        .create_requests()
        .into_iter()
        .map(|r| format!("{}|{}", r.amount.value, r.metadata.venue.unwrap_or_default()))
        .collect();
    values.sort();
    let mut expected: Vec<String> = (1..=10).map(|i| format!("{}.00|Hall {}", i, i)).collect();
    expected.sort();
    assert_eq!(values, expected);
}

// =============================================================================
// Payment Status
// =============================================================================

#[tokio::test]
async fn status_success_only_when_paid() {
    let cases = [
        (PaymentStatus::Paid, "paid", true),
        (PaymentStatus::Open, "open", false),
        (PaymentStatus::Pending, "pending", false),
        (PaymentStatus::Authorized, "authorized", false),
        (PaymentStatus::Expired, "expired", false),
        (PaymentStatus::Failed, "failed", false),
        (PaymentStatus::Canceled, "canceled", false),
        (PaymentStatus::Unknown("refunded".to_string()), "refunded", false),
    ];

    for (status, raw, success) in cases {
        let mock = MockPaymentProcessor::new();
        mock.set_status("tr_1", status);

        let response = app(&mock).oneshot(status_request("tr_1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({ "status": raw, "success": success })
        );
    }
}

#[tokio::test]
async fn status_lookup_failure_returns_error_envelope() {
    let mock = MockPaymentProcessor::new();

    let response = app(&mock)
        .oneshot(status_request("tr_missing"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        read_json(response).await,
        json!({
            "error": "Failed to get payment status",
            "details": "No payment exists with token tr_missing."
        })
    );
}

// =============================================================================
// Webhook
// =============================================================================

#[tokio::test]
async fn webhook_with_known_id_refetches_and_answers_ok() {
    let mock = MockPaymentProcessor::new();
    mock.set_status("tr_1", PaymentStatus::Paid);

    let response = app(&mock)
        .oneshot(webhook_request("application/x-www-form-urlencoded", "id=tr_1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_text(response).await, "OK");
    assert_eq!(mock.call_count("get_payment"), 1);
}

#[tokio::test]
async fn webhook_with_failing_lookup_answers_ok() {
    let mock = MockPaymentProcessor::new();
    mock.set_error(ProcessorError::network("connection refused"));

    let response = app(&mock)
        .oneshot(webhook_request("application/json", r#"{"id":"tr_1"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_text(response).await, "OK");
}

#[tokio::test]
async fn webhook_without_id_answers_ok() {
    let mock = MockPaymentProcessor::new();

    for (content_type, body) in [
        ("application/json", "{}"),
        ("application/json", "{broken"),
        ("application/x-www-form-urlencoded", ""),
        ("text/plain", "hello"),
    ] {
        let response = app(&mock)
            .oneshot(webhook_request(content_type, body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_text(response).await, "OK");
    }

    assert!(!mock.was_called("get_payment"));
}

#[tokio::test]
async fn webhook_with_large_body_answers_ok() {
    let mock = MockPaymentProcessor::new();
    // Larger than axum's default 2 MB extractor limit
    let body = format!("id=tr_1&padding={}", "x".repeat(3 * 1024 * 1024));

    let response = app(&mock)
        .oneshot(webhook_request("application/x-www-form-urlencoded", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_text(response).await, "OK");
    assert!(!mock.was_called("get_payment"));
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_endpoint_answers_ok() {
    let mock = MockPaymentProcessor::new();

    let response = app(&mock)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({ "status": "ok" }));
    assert!(mock.calls().is_empty());
}
