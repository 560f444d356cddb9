//! REST API helpers for communicating with the backend.
//!
//! Every call reads the caller-supplied credential at send time and attaches
//! it as a bearer header when present; requests go out unauthenticated
//! otherwise. Transport failures are returned unchanged — no retries and no
//! credential mutation happen here. Renewal lives with the session
//! bootstrapper and the route guard, never inside this layer, so an
//! authorized call can never trigger another authorized call.
//!
//! Real HTTP via `gloo-net` is only available in the browser; on other
//! targets these functions return a transport error so the crate still
//! compiles and unit-tests on the host.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthResponse, RegisterRequest};
#[cfg(target_arch = "wasm32")]
use super::types::{LoginRequest, NewsletterRequest};
#[cfg(target_arch = "wasm32")]
use crate::config;

/// Value for the `Authorization` header, if a credential is present.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    match token {
        Some(t) if !t.is_empty() => Some(format!("Bearer {t}")),
        _ => None,
    }
}

/// POST to `path`, attaching the credential and the refresh cookie.
///
/// # Errors
///
/// `Transport` if no response was received, `Rejected` for any non-2xx
/// status (with the raw body text for message extraction).
#[cfg(target_arch = "wasm32")]
async fn send_post(
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    use web_sys::RequestCredentials;

    let mut builder =
        gloo_net::http::Request::post(path).credentials(RequestCredentials::Include);
    if let Some(header) = bearer_header(token) {
        builder = builder.header("Authorization", &header);
    }

    let sent = match body {
        Some(json) => {
            builder
                .json(&json)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;

    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Rejected { status, body });
    }
    Ok(resp)
}

#[cfg(target_arch = "wasm32")]
async fn post_auth(
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Result<AuthResponse, ApiError> {
    let resp = send_post(path, token, body).await?;
    resp.json::<AuthResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Exchange email and password for a credential.
///
/// # Errors
///
/// See [`ApiError`]; the caller renders `user_message()` and keeps the
/// session untouched.
pub async fn login(
    token: Option<&str>,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let body = serde_json::to_value(LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        })
        .map_err(|e| ApiError::Decode(e.to_string()))?;
        post_auth(config::LOGIN_PATH, token, Some(body)).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (token, email, password);
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}

/// Create an account. The response either carries a credential (auto-login)
/// or only a message (verification pending).
///
/// # Errors
///
/// See [`ApiError`].
pub async fn register(
    token: Option<&str>,
    request: &RegisterRequest,
) -> Result<AuthResponse, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let body =
            serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        post_auth(config::REGISTER_PATH, token, Some(body)).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (token, request);
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}

/// Renew the credential using the HTTP-only refresh cookie. No body; the
/// renewal artifact travels with the request implicitly.
///
/// # Errors
///
/// Any failure here means "no renewed session": transport errors, non-2xx,
/// and 2xx responses without a usable token all land on the same path.
pub async fn refresh(token: Option<&str>) -> Result<AuthResponse, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        post_auth(config::REFRESH_PATH, token, None).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}

/// End the server-side session. Best effort: the client clears its own
/// state regardless of the outcome.
pub async fn logout(token: Option<&str>) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = send_post(config::LOGOUT_PATH, token, None).await {
            log::debug!("logout request failed: {err}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
    }
}

/// Subscribe an email address to the newsletter.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn subscribe_newsletter(token: Option<&str>, email: &str) -> Result<(), ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let body = serde_json::to_value(NewsletterRequest {
            email: email.to_owned(),
        })
        .map_err(|e| ApiError::Decode(e.to_string()))?;
        send_post(config::NEWSLETTER_PATH, token, Some(body)).await?;
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (token, email);
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}
