use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Approval state of a marketplace provider account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderStatus {
    Pending,
    Approved,
    Rejected,
}

impl ProviderStatus {
    /// Sort rank for the approval queue: pending rows surface first,
    /// rejected ones sink to the bottom.
    pub fn rank(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Approved => 1,
            Self::Rejected => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Value the backend expects in an approve-or-reject request.
    pub fn as_request_value(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub business_name: String,
    pub email: String,
    pub phone: String,
    pub status: ProviderStatus,
    pub created_at: Timestamp,
}

/// A provider record as the marketplace backend serializes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProvider {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub business_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub authorization_status: ProviderStatus,
    pub created_at: Timestamp,
}

impl From<RawProvider> for Provider {
    fn from(raw: RawProvider) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            business_name: raw.business_name.unwrap_or_default(),
            email: raw.email,
            phone: raw.phone_number.unwrap_or_default(),
            status: raw.authorization_status,
            created_at: raw.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_provider_deserializes_backend_payload() {
        let json = r#"{
            "_id": "663d2f1c9b1e8a0012345678",
            "name": "Dana Reyes",
            "businessName": "Reyes Catering",
            "email": "dana@reyes.example",
            "phoneNumber": "5550001111",
            "authorizationStatus": "pending",
            "createdAt": "2026-07-03T10:15:00Z"
        }"#;

        let provider: Provider = serde_json::from_str::<RawProvider>(json).unwrap().into();

        assert_eq!(provider.id, "663d2f1c9b1e8a0012345678");
        assert_eq!(provider.business_name, "Reyes Catering");
        assert_eq!(provider.status, ProviderStatus::Pending);
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let json = r#"{
            "_id": "abc",
            "name": "Solo",
            "email": "solo@example.com",
            "authorizationStatus": "approved",
            "createdAt": "2026-01-01T00:00:00Z"
        }"#;

        let provider: Provider = serde_json::from_str::<RawProvider>(json).unwrap().into();

        assert_eq!(provider.business_name, "");
        assert_eq!(provider.phone, "");
        assert_eq!(provider.status, ProviderStatus::Approved);
    }
}
