use anyhow::Context;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::Result;

pub const SESSION_COOKIE_NAME: &str = "bazaari_session";

/// Account roles are a closed set; this console only ever issues
/// administrator sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub admin_id: String,
    pub email: String,
    pub role: Role,
    pub created_at: Timestamp,
}

pub fn encode_session(session: &AdminSession) -> Result<String> {
    let json = serde_json::to_string(session).context("failed to serialize session")?;
    use base64::Engine;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

pub fn decode_session(encoded: &str) -> Result<AdminSession> {
    use base64::Engine;
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(encoded)
        .context("failed to decode base64")?;
    let json = String::from_utf8(bytes).context("invalid UTF-8 in session")?;
    serde_json::from_str(&json).context("failed to parse session JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_round_trips_through_cookie_encoding() {
        let session = AdminSession {
            admin_id: "663d2f1c9b1e8a0012345678".to_string(),
            email: "ops@example.com".to_string(),
            role: Role::Administrator,
            created_at: Timestamp::UNIX_EPOCH,
        };

        let encoded = encode_session(&session).unwrap();
        let decoded = decode_session(&encoded).unwrap();

        assert_eq!(decoded, session);
    }

    #[test]
    fn garbage_cookie_is_an_error() {
        assert!(decode_session("not base64!!").is_err());
    }
}
