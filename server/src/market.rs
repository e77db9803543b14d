use std::sync::LazyLock;

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use types::{Provider, ProviderStatus, RawProvider, RawUser, Result, UserAccount, err};

use crate::CONFIG;

pub static MARKET_CLIENT: LazyLock<MarketClient> =
    LazyLock::new(|| MarketClient::new(CONFIG.api_url.clone()));

pub(crate) trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.send().await?.error_for_status()?;
        let body = response.bytes().await?;

        match serde_json::from_slice(&body) {
            Ok(r) => Ok(r),
            Err(error) => {
                let body = String::from_utf8_lossy(&body);
                tracing::debug!(?error, ?body, "failed to parse response");
                Err(error.into())
            }
        }
    }
}

/// Identity fields the backend returns on a successful admin login.
pub struct AdminIdentity {
    pub id: String,
    pub email: String,
}

/// Client for the marketplace REST backend.
#[derive(Clone)]
pub struct MarketClient {
    client: Client,
    base_url: Url,
}

impl MarketClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path)?;

        Ok(self.client.request(method, url))
    }

    fn get(&self, path: impl AsRef<str>) -> Result<RequestBuilder> {
        self.request(Method::GET, path.as_ref())
    }

    fn post(&self, path: impl AsRef<str>) -> Result<RequestBuilder> {
        self.request(Method::POST, path.as_ref())
    }

    fn patch(&self, path: impl AsRef<str>) -> Result<RequestBuilder> {
        self.request(Method::PATCH, path.as_ref())
    }

    /// Authenticate an administrator. 400 and 404 responses are collapsed
    /// into a credentials error; anything else surfaces the backend's own
    /// message when it provides one.
    pub async fn admin_login(&self, email: &str, password: &SecretString) -> Result<AdminIdentity> {
        let response = self
            .post("/api/admin/login")?
            .json(&json!({
                "email": email,
                "password": password.expose_secret(),
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(err!("{}", login_failure_message(status, &body)));
        }

        identity_from_login(response.json().await?)
    }

    pub async fn admin_logout(&self) -> Result<()> {
        self.post("/api/admin/logout")?
            .try_send::<serde_json::Value>()
            .await?;
        Ok(())
    }

    pub async fn list_users(&self) -> Result<Vec<UserAccount>> {
        #[derive(Deserialize)]
        struct UsersResponse {
            users: Vec<RawUser>,
        }

        let response: UsersResponse = self.get("/api/user")?.try_send().await?;
        Ok(response.users.into_iter().map(UserAccount::from).collect())
    }

    pub async fn list_providers(&self) -> Result<Vec<Provider>> {
        #[derive(Deserialize)]
        struct ProvidersResponse {
            providers: Vec<RawProvider>,
        }

        let response: ProvidersResponse = self.get("/api/provider")?.try_send().await?;
        Ok(response.providers.into_iter().map(Provider::from).collect())
    }

    pub async fn create_user(
        &self,
        full_name: &str,
        email: &str,
        phone_number: &str,
        password: &str,
    ) -> Result<()> {
        self.post("/api/user")?
            .json(&json!({
                "fullName": full_name,
                "email": email,
                "phoneNumber": phone_number,
                "password": password,
            }))
            .try_send::<serde_json::Value>()
            .await?;
        Ok(())
    }

    pub async fn create_provider(
        &self,
        name: &str,
        email: &str,
        phone_number: &str,
        password: &str,
    ) -> Result<()> {
        self.post("/api/provider")?
            .json(&json!({
                "name": name,
                "email": email,
                "phoneNumber": phone_number,
                "password": password,
            }))
            .try_send::<serde_json::Value>()
            .await?;
        Ok(())
    }

    /// Forward an approve-or-reject decision for a provider request. The
    /// caller is expected to refetch the provider list afterwards; the
    /// record is never mutated locally.
    pub async fn review_request(&self, provider_id: &str, status: ProviderStatus) -> Result<()> {
        self.patch("/api/provider/request")?
            .json(&json!({
                "providerId": provider_id,
                "status": status.as_request_value(),
            }))
            .try_send::<serde_json::Value>()
            .await?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct LoginResponse {
    admin: Option<AdminPayload>,
}

#[derive(Deserialize)]
struct AdminPayload {
    #[serde(rename = "_id")]
    id: Option<String>,
    email: Option<String>,
}

/// A successful login response still has to carry both identity fields; a
/// 2xx without them is treated as a failure.
fn identity_from_login(body: LoginResponse) -> Result<AdminIdentity> {
    let admin = body
        .admin
        .ok_or_else(|| err!("login response missing administrator data"))?;

    match (admin.id, admin.email) {
        (Some(id), Some(email)) => Ok(AdminIdentity { id, email }),
        _ => Err(err!("login response missing administrator email or id")),
    }
}

fn login_failure_message(status: StatusCode, body: &str) -> String {
    if matches!(status, StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND) {
        return "Invalid email or password".to_string();
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("Login failed: server responded with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_and_not_found_mean_bad_credentials() {
        for status in [StatusCode::BAD_REQUEST, StatusCode::NOT_FOUND] {
            assert_eq!(
                login_failure_message(status, ""),
                "Invalid email or password"
            );
        }
    }

    #[test]
    fn other_failures_surface_the_backend_message() {
        let message = login_failure_message(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message": "database unavailable"}"#,
        );
        assert_eq!(message, "database unavailable");
    }

    #[test]
    fn other_failures_without_a_message_fall_back_to_the_status() {
        let message = login_failure_message(StatusCode::BAD_GATEWAY, "");
        assert!(message.contains("502"));
    }

    #[test]
    fn login_response_with_both_fields_yields_an_identity() {
        let body: LoginResponse =
            serde_json::from_str(r#"{"admin": {"_id": "abc", "email": "ops@example.com"}}"#)
                .unwrap();

        let identity = identity_from_login(body).unwrap();
        assert_eq!(identity.id, "abc");
        assert_eq!(identity.email, "ops@example.com");
    }

    #[test]
    fn login_response_missing_the_id_is_a_failure() {
        let body: LoginResponse =
            serde_json::from_str(r#"{"admin": {"email": "ops@example.com"}}"#).unwrap();
        assert!(identity_from_login(body).is_err());
    }

    #[test]
    fn login_response_without_admin_data_is_a_failure() {
        let body: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(identity_from_login(body).is_err());
    }
}
