//! Mock payment processor for testing.
//!
//! Provides a configurable implementation of `PaymentProcessor` for unit and
//! integration tests. Supports:
//! - Pre-configured payments
//! - Error injection
//! - Call tracking

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::payment::PaymentStatus;
use crate::ports::{CreatePaymentRequest, PaymentProcessor, ProcessorError, ProcessorPayment};

/// Mock payment processor for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentProcessor::new();
///
/// // Seed a payment
/// mock.add_payment(ProcessorPayment { id: "tr_123".into(), ... });
///
/// // Inject errors
/// mock.set_method_error("get_payment", ProcessorError::network("timeout"));
/// ```
#[derive(Default)]
pub struct MockPaymentProcessor {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Known payments by id.
    payments: HashMap<String, ProcessorPayment>,

    /// Payment to return from the next `create_payment` call.
    next_payment: Option<ProcessorPayment>,

    /// Error to return on the next call to any method.
    next_error: Option<ProcessorError>,

    /// Specific errors by method name.
    method_errors: HashMap<String, ProcessorError>,

    /// Every creation request received, in order.
    create_requests: Vec<CreatePaymentRequest>,

    call_log: Vec<MethodCall>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockPaymentProcessor {
    /// Create a new mock processor with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Add a payment to the "processor".
    pub fn add_payment(&self, payment: ProcessorPayment) {
        let id = payment.id.clone();
        self.inner.lock().unwrap().payments.insert(id, payment);
    }

    /// Change the status of a known payment, or register it if unknown.
    pub fn set_status(&self, payment_id: &str, status: PaymentStatus) {
        let mut state = self.inner.lock().unwrap();
        state
            .payments
            .entry(payment_id.to_string())
            .and_modify(|p| p.status = status.clone())
            .or_insert_with(|| ProcessorPayment {
                id: payment_id.to_string(),
                status,
                checkout_url: None,
            });
    }

    /// Set the payment to return on the next `create_payment` call.
    pub fn set_next_payment(&self, payment: ProcessorPayment) {
        self.inner.lock().unwrap().next_payment = Some(payment);
    }

    /// Set an error to return on the next call to any method.
    pub fn set_error(&self, error: ProcessorError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    /// Set an error for a specific method.
    pub fn set_method_error(&self, method: &str, error: ProcessorError) {
        self.inner
            .lock()
            .unwrap()
            .method_errors
            .insert(method.to_string(), error);
    }

    /// Clear all configured errors.
    pub fn clear_errors(&self) {
        let mut state = self.inner.lock().unwrap();
        state.next_error = None;
        state.method_errors.clear();
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Get all recorded method calls.
    pub fn calls(&self) -> Vec<MethodCall> {
        self.inner.lock().unwrap().call_log.clone()
    }

    /// Check if a method was called.
    pub fn was_called(&self, method: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .call_log
            .iter()
            .any(|c| c.method == method)
    }

    /// Get count of calls to a method.
    pub fn call_count(&self, method: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    /// All creation requests received so far.
    pub fn create_requests(&self) -> Vec<CreatePaymentRequest> {
        self.inner.lock().unwrap().create_requests.clone()
    }

    /// The most recent creation request, if any.
    pub fn last_create_request(&self) -> Option<CreatePaymentRequest> {
        self.inner.lock().unwrap().create_requests.last().cloned()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internal Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn record_call(&self, method: &str, args: Vec<String>) {
        self.inner.lock().unwrap().call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
    }

    fn check_error(&self, method: &str) -> Result<(), ProcessorError> {
        let mut state = self.inner.lock().unwrap();

        if let Some(error) = state.method_errors.get(method) {
            return Err(error.clone());
        }

        // Global error is consumed
        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        Ok(())
    }
}

impl Clone for MockPaymentProcessor {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl PaymentProcessor for MockPaymentProcessor {
    async fn create_payment(
        &self,
        request: CreatePaymentRequest,
    ) -> Result<ProcessorPayment, ProcessorError> {
        self.record_call(
            "create_payment",
            vec![
                request.amount.value.clone(),
                request.description.clone().unwrap_or_default(),
            ],
        );
        self.check_error("create_payment")?;

        let mut state = self.inner.lock().unwrap();
        state.create_requests.push(request);

        let payment = state.next_payment.take().unwrap_or_else(|| {
            let id = format!("tr_mock_{}", uuid::Uuid::new_v4().simple());
            ProcessorPayment {
                checkout_url: Some(format!("https://www.mollie.com/checkout/select-method/{}", id)),
                id,
                status: PaymentStatus::Open,
            }
        });

        state.payments.insert(payment.id.clone(), payment.clone());

        Ok(payment)
    }

    async fn get_payment(&self, payment_id: &str) -> Result<ProcessorPayment, ProcessorError> {
        self.record_call("get_payment", vec![payment_id.to_string()]);
        self.check_error("get_payment")?;

        let state = self.inner.lock().unwrap();
        state.payments.get(payment_id).cloned().ok_or_else(|| {
            ProcessorError::not_found(format!("No payment exists with token {}.", payment_id))
                .with_http_status(404)
        })
    }
}
