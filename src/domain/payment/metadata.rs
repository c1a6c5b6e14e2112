//! Ticket metadata attached to a payment.

use serde::{Deserialize, Serialize};

/// Opaque correlation data forwarded to the processor verbatim.
///
/// None of these fields are interpreted or validated here. Absent fields are
/// left out of the serialized bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concert_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
}

impl PaymentMetadata {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.concert_date.is_none()
            && self.venue.is_none()
            && self.location.is_none()
            && self.ticket_type.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_camel_case_keys() {
        let metadata = PaymentMetadata {
            concert_date: Some("2024-05-01".to_string()),
            venue: Some("Hall".to_string()),
            location: Some("City".to_string()),
            ticket_type: Some("VIP".to_string()),
        };

        assert_eq!(
            serde_json::to_value(&metadata).unwrap(),
            json!({
                "concertDate": "2024-05-01",
                "venue": "Hall",
                "location": "City",
                "ticketType": "VIP"
            })
        );
    }

    #[test]
    fn absent_fields_are_omitted() {
        let metadata = PaymentMetadata {
            venue: Some("Hall".to_string()),
            ..Default::default()
        };

        assert_eq!(serde_json::to_value(&metadata).unwrap(), json!({"venue": "Hall"}));
        assert!(!metadata.is_empty());
        assert!(PaymentMetadata::default().is_empty());
    }
}
