//! Mollie payment processor adapter.
//!
//! Implements the `PaymentProcessor` trait over the Mollie v2 REST API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = MollieConfig::new(api_key).with_timeout(Duration::from_secs(10));
//! let adapter = MollieAdapter::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::config::ProcessorConfig;
use crate::ports::{CreatePaymentRequest, PaymentProcessor, ProcessorError, ProcessorPayment};

use super::api_types::{MollieCreatePayment, MollieErrorBody, MolliePayment};

/// Default Mollie API host.
pub const DEFAULT_API_BASE_URL: &str = "https://api.mollie.com";

/// Mollie API configuration.
#[derive(Clone)]
pub struct MollieConfig {
    /// Mollie API key (test_... or live_...).
    api_key: SecretString,

    /// Base URL for the Mollie API, without trailing slash.
    api_base_url: String,

    /// Request timeout. `None` keeps the HTTP client default.
    timeout: Option<Duration>,
}

impl MollieConfig {
    /// Create a new Mollie configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a request timeout for every processor call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Whether the key targets Mollie's test mode.
    pub fn is_test_mode(&self) -> bool {
        self.api_key.expose_secret().starts_with("test_")
    }
}

impl From<&ProcessorConfig> for MollieConfig {
    fn from(config: &ProcessorConfig) -> Self {
        let mollie = Self {
            api_key: config.mollie_api_key.clone(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
        .with_base_url(config.api_base_url.as_str());

        match config.timeout_secs {
            Some(secs) => mollie.with_timeout(Duration::from_secs(secs)),
            None => mollie,
        }
    }
}

/// Mollie payment processor adapter.
pub struct MollieAdapter {
    config: MollieConfig,
    http_client: reqwest::Client,
}

impl MollieAdapter {
    /// Create a new Mollie adapter with the given configuration.
    pub fn new(config: MollieConfig) -> Result<Self, ProcessorError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| ProcessorError::provider(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Whether this adapter talks to Mollie's test mode.
    pub fn is_test_mode(&self) -> bool {
        self.config.is_test_mode()
    }

    fn payments_url(&self) -> String {
        format!("{}/v2/payments", self.config.api_base_url)
    }

    /// URL of a single payment. The id is pushed as one encoded path segment.
    ///
    /// Ids that would collapse into the collection path (`""`, `"."`, `".."`)
    /// cannot name a payment and are reported as not found.
    fn payment_url(&self, payment_id: &str) -> Result<reqwest::Url, ProcessorError> {
        if matches!(payment_id, "" | "." | "..") {
            return Err(ProcessorError::not_found(format!(
                "No payment exists with token {}.",
                payment_id
            )));
        }

        let mut url = reqwest::Url::parse(&self.payments_url())
            .map_err(|e| ProcessorError::provider(format!("Invalid Mollie base URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| ProcessorError::provider("Invalid Mollie base URL"))?
            .push(payment_id);

        Ok(url)
    }

    /// Turn a Mollie response into a payment, or a categorized error.
    async fn read_payment(
        response: reqwest::Response,
        operation: &str,
    ) -> Result<ProcessorPayment, ProcessorError> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let error = error_from_response(status, &error_text);
            tracing::error!(
                operation,
                http_status = status.as_u16(),
                error = %error.message,
                "Mollie request failed"
            );
            return Err(error);
        }

        let payment: MolliePayment = response.json().await.map_err(|e| {
            ProcessorError::provider(format!("Failed to parse Mollie response: {}", e))
                .with_http_status(status.as_u16())
        })?;

        Ok(payment.into())
    }
}

/// Map a non-success Mollie response to a `ProcessorError`.
fn error_from_response(status: reqwest::StatusCode, body: &str) -> ProcessorError {
    let message = serde_json::from_str::<MollieErrorBody>(body)
        .ok()
        .and_then(|b| b.message())
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("Mollie API error: HTTP {}", status.as_u16())
            } else {
                format!("Mollie API error: {}", body)
            }
        });

    let error = match status.as_u16() {
        401 | 403 => ProcessorError::authentication(message),
        404 | 410 => ProcessorError::not_found(message),
        400 | 422 => ProcessorError::rejected(message),
        _ => ProcessorError::provider(message),
    };

    error.with_http_status(status.as_u16())
}

#[async_trait]
impl PaymentProcessor for MollieAdapter {
    async fn create_payment(
        &self,
        request: CreatePaymentRequest,
    ) -> Result<ProcessorPayment, ProcessorError> {
        let body = MollieCreatePayment::from(request);

        let response = self
            .http_client
            .post(self.payments_url())
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| ProcessorError::network(e.to_string()))?;

        let payment = Self::read_payment(response, "create_payment").await?;

        tracing::debug!(
            payment_id = %payment.id,
            status = %payment.status,
            "Mollie payment created"
        );

        Ok(payment)
    }

    async fn get_payment(&self, payment_id: &str) -> Result<ProcessorPayment, ProcessorError> {
        let url = self.payment_url(payment_id)?;

        let response = self
            .http_client
            .get(url)
            .bearer_auth(self.config.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| ProcessorError::network(e.to_string()))?;

        Self::read_payment(response, "get_payment").await
    }
}
