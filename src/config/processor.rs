//! Payment processor configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Maximum allowed processor timeout in seconds.
const MAX_TIMEOUT_SECS: u64 = 300;

/// Payment processor configuration (Mollie)
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessorConfig {
    /// Mollie API key
    pub mollie_api_key: SecretString,

    /// Public URL the processor posts status notifications to
    pub webhook_url: Option<String>,

    /// Mollie API base URL (overridable for testing)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Timeout for each processor request in seconds
    pub timeout_secs: Option<u64>,
}

impl ProcessorConfig {
    /// Check if using Mollie test mode
    pub fn is_test_mode(&self) -> bool {
        self.mollie_api_key.expose_secret().starts_with("test_")
    }

    /// Check if using Mollie live mode
    pub fn is_live_mode(&self) -> bool {
        self.mollie_api_key.expose_secret().starts_with("live_")
    }

    /// Validate processor configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.mollie_api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("MOLLIE_API_KEY"));
        }
        if !self.is_test_mode() && !self.is_live_mode() {
            return Err(ValidationError::InvalidMollieKey);
        }

        if !is_http_url(&self.api_base_url) {
            return Err(ValidationError::InvalidApiBaseUrl);
        }

        if let Some(url) = &self.webhook_url {
            if !is_http_url(url) {
                return Err(ValidationError::InvalidWebhookUrl);
            }
        }

        if let Some(secs) = self.timeout_secs {
            if secs == 0 || secs > MAX_TIMEOUT_SECS {
                return Err(ValidationError::InvalidTimeout);
            }
        }

        if *environment == Environment::Production {
            if !self.is_live_mode() {
                return Err(ValidationError::LiveKeyRequired);
            }
            match &self.webhook_url {
                None => return Err(ValidationError::MissingRequired("WEBHOOK_URL")),
                Some(url) if !url.starts_with("https://") => {
                    return Err(ValidationError::WebhookUrlMustBeHttps)
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

fn default_api_base_url() -> String {
    "https://api.mollie.com".to_string()
}
