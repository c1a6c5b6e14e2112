//! Mollie v2 API wire types.
//!
//! Only the fields this service reads or writes are modelled. Unknown
//! response fields are ignored.

use serde::{Deserialize, Serialize};

use crate::domain::payment::{PaymentMetadata, PaymentStatus};
use crate::ports::{CreatePaymentRequest, Money, ProcessorPayment};

/// Body of `POST /v2/payments`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MollieCreatePayment {
    pub amount: Money,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(skip_serializing_if = "PaymentMetadata::is_empty")]
    pub metadata: PaymentMetadata,
}

impl From<CreatePaymentRequest> for MollieCreatePayment {
    fn from(request: CreatePaymentRequest) -> Self {
        Self {
            amount: request.amount,
            description: request.description,
            redirect_url: request.redirect_url,
            webhook_url: request.webhook_url,
            metadata: request.metadata,
        }
    }
}

/// Payment resource returned by create and get.
#[derive(Debug, Clone, Deserialize)]
pub struct MolliePayment {
    pub id: String,

    pub status: String,

    #[serde(rename = "_links", default)]
    pub links: MollieLinks,
}

/// HAL links on a payment resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MollieLinks {
    #[serde(default)]
    pub checkout: Option<MollieLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MollieLink {
    pub href: String,
}

impl From<MolliePayment> for ProcessorPayment {
    fn from(payment: MolliePayment) -> Self {
        Self {
            id: payment.id,
            status: PaymentStatus::parse(&payment.status),
            checkout_url: payment.links.checkout.map(|link| link.href),
        }
    }
}

/// Error body (`application/hal+json`) returned on 4xx/5xx.
#[derive(Debug, Clone, Deserialize)]
pub struct MollieErrorBody {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub detail: Option<String>,

    #[serde(default)]
    pub field: Option<String>,
}

impl MollieErrorBody {
    /// Best human-readable message: `detail`, else `title`.
    pub fn message(&self) -> Option<String> {
        let base = self.detail.clone().or_else(|| self.title.clone())?;
        Some(match &self.field {
            Some(field) => format!("{} (field: {})", base, field),
            None => base,
        })
    }
}
