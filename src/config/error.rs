//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid processor timeout")]
    InvalidTimeout,

    #[error("Invalid request timeout")]
    InvalidRequestTimeout,

    #[error("Invalid Mollie API key format")]
    InvalidMollieKey,

    #[error("Mollie live API key required in production")]
    LiveKeyRequired,

    #[error("Invalid Mollie API base URL")]
    InvalidApiBaseUrl,

    #[error("Invalid webhook URL")]
    InvalidWebhookUrl,

    #[error("Webhook URL must use HTTPS in production")]
    WebhookUrlMustBeHttps,
}
