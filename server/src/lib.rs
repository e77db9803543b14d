mod auth_routes;
mod config;
mod market;
mod notify;

use axum::Router;
use axum::http::HeaderMap;
use dioxus::fullstack::FullstackContext;
use types::{AdminSession, Result, Role, SESSION_COOKIE_NAME, decode_session, err};

pub use crate::config::CONFIG;
pub use crate::market::MARKET_CLIENT;
pub use crate::notify::NOTIFY;

use crate::auth_routes::auth_router;

pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Build the non-RPC routes (credential login and logout). Touches the
/// configuration so a misconfigured deployment fails at startup instead of
/// on the first request.
pub async fn init() -> Result<Router> {
    let _ = &*CONFIG;
    Ok(auth_router())
}

/// Extract the admin session from the request cookie.
pub async fn get_session_from_cookie() -> Result<AdminSession> {
    let headers: HeaderMap = FullstackContext::extract().await?;
    session_from_headers(&headers)
}

pub(crate) fn session_from_headers(headers: &HeaderMap) -> Result<AdminSession> {
    let cookie_header = headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| err!("no cookies in request"))?;

    for cookie_str in cookie_header.split(';') {
        let cookie_str = cookie_str.trim();
        if let Some(value) = cookie_str.strip_prefix(&format!("{}=", SESSION_COOKIE_NAME)) {
            return decode_session(value);
        }
    }

    Err(err!("session cookie not found"))
}

/// Require an authenticated administrator, returning the session if valid.
pub async fn require_admin_session() -> Result<AdminSession> {
    let session = get_session_from_cookie().await?;

    // Role is a closed enum and the console only issues administrator
    // sessions, so a decoded cookie is sufficient.
    match session.role {
        Role::Administrator => Ok(session),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use jiff::Timestamp;
    use types::encode_session;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_str(value).unwrap(),
        );
        headers
    }

    #[test]
    fn session_is_found_among_other_cookies() {
        let session = AdminSession {
            admin_id: "abc".to_string(),
            email: "ops@example.com".to_string(),
            role: Role::Administrator,
            created_at: Timestamp::UNIX_EPOCH,
        };
        let encoded = encode_session(&session).unwrap();
        let headers =
            headers_with_cookie(&format!("theme=dark; {SESSION_COOKIE_NAME}={encoded}; a=b"));

        let decoded = session_from_headers(&headers).unwrap();
        assert_eq!(decoded.admin_id, "abc");
    }

    #[test]
    fn missing_cookie_is_an_error() {
        let headers = headers_with_cookie("theme=dark");
        assert!(session_from_headers(&headers).is_err());
    }
}
