use jiff::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: Timestamp,
}

/// A user record as the marketplace backend serializes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub created_at: Timestamp,
}

impl From<RawUser> for UserAccount {
    fn from(raw: RawUser) -> Self {
        Self {
            id: raw.id,
            full_name: raw.full_name,
            email: raw.email,
            phone: raw.phone_number.unwrap_or_default(),
            created_at: raw.created_at,
        }
    }
}
