use dioxus::prelude::*;
use types::{AdminSession, Provider, ProviderStatus, UserAccount};

#[post("/api/current-admin")]
pub async fn get_current_admin() -> ServerFnResult<Option<AdminSession>> {
    match server::get_session_from_cookie().await {
        Ok(session) => Ok(Some(session)),
        Err(_) => Ok(None),
    }
}

#[post("/api/users")]
pub async fn list_users() -> ServerFnResult<Vec<UserAccount>> {
    server::require_admin_session().await?;
    Ok(server::MARKET_CLIENT.list_users().await?)
}

#[post("/api/providers")]
pub async fn list_providers() -> ServerFnResult<Vec<Provider>> {
    server::require_admin_session().await?;
    Ok(server::MARKET_CLIENT.list_providers().await?)
}

#[post("/api/users/create")]
pub async fn create_user(
    full_name: String,
    email: String,
    phone_number: String,
    password: String,
) -> ServerFnResult<()> {
    server::require_admin_session().await?;
    server::MARKET_CLIENT
        .create_user(&full_name, &email, &phone_number, &password)
        .await?;
    Ok(())
}

#[post("/api/providers/create")]
pub async fn create_provider(
    name: String,
    email: String,
    phone_number: String,
    password: String,
) -> ServerFnResult<()> {
    server::require_admin_session().await?;
    server::MARKET_CLIENT
        .create_provider(&name, &email, &phone_number, &password)
        .await?;
    Ok(())
}

/// Forward an approve or deny decision for a pending provider request.
#[post("/api/providers/review")]
pub async fn review_provider(provider_id: String, approve: bool) -> ServerFnResult<()> {
    server::require_admin_session().await?;
    let status = if approve {
        ProviderStatus::Approved
    } else {
        ProviderStatus::Rejected
    };
    server::MARKET_CLIENT
        .review_request(&provider_id, status)
        .await?;
    Ok(())
}
