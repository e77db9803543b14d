use axum::{
    Form, Router,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use cookie::Cookie;
use jiff::Timestamp;
use secrecy::SecretString;
use serde::Deserialize;
use types::{AdminSession, Role, SESSION_COOKIE_NAME, encode_session};

use crate::{MARKET_CLIENT, NOTIFY, session_from_headers};

pub fn auth_router() -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", get(logout))
}

#[derive(Deserialize)]
struct LoginForm {
    email: String,
    password: SecretString,
}

async fn login(Form(form): Form<LoginForm>) -> Response {
    match login_inner(form).await {
        Ok(response) => response,
        Err(error) => {
            let message = format!("{error:#}");
            tracing::info!(%message, "login rejected");
            Redirect::to(&format!("/login?error={}", urlencoding::encode(&message)))
                .into_response()
        }
    }
}

async fn login_inner(form: LoginForm) -> types::Result<Response> {
    let identity = MARKET_CLIENT.admin_login(&form.email, &form.password).await?;

    let session = AdminSession {
        admin_id: identity.id.clone(),
        email: identity.email,
        role: Role::Administrator,
        created_at: Timestamp::now(),
    };
    let encoded = encode_session(&session)?;

    NOTIFY.connect(&identity.id).await;

    let cookie = Cookie::build((SESSION_COOKIE_NAME, encoded))
        .path("/")
        .http_only(true)
        .build();

    let mut response = Redirect::to("/").into_response();
    response.headers_mut().insert(
        axum::http::header::SET_COOKIE,
        cookie.to_string().parse()?,
    );

    Ok(response)
}

async fn logout(headers: HeaderMap) -> impl IntoResponse {
    // The backend call is best-effort; local cleanup happens regardless of
    // its outcome.
    if let Err(error) = MARKET_CLIENT.admin_logout().await {
        tracing::warn!(%error, "backend logout failed");
    }

    if let Ok(session) = session_from_headers(&headers) {
        NOTIFY.disconnect(&session.admin_id).await;
    }

    // Clear the session cookie
    let cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .max_age(cookie::time::Duration::ZERO)
        .build();

    let mut response = Redirect::to("/login").into_response();
    response.headers_mut().insert(
        axum::http::header::SET_COOKIE,
        cookie.to_string().parse().unwrap(),
    );

    response
}
