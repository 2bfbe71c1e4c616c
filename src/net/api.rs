//! Authentication endpoints of the championship REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A non-success status becomes [`AuthError::Rejected`] carrying the
//! backend's `{"error": ...}` message (or a generic fallback). Network and
//! malformed-body failures become [`AuthError::Transport`]. Neither variant
//! touches session state; callers decide what to commit.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{AuthResponse, LoginRequest, RegisterRequest};

/// Base path of the championship REST API, served behind the dev proxy.
pub const API_BASE: &str = "/api";

/// Fallback shown when a rejection carries no usable error payload.
const GENERIC_REJECTION: &str = "An unknown authentication error occurred.";

/// Failure modes of the login/register calls.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The backend refused the credentials and said why.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Transport(String),
}

/// Exchange credentials for a session token via `POST /api/login/`.
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] on a non-success status and
/// [`AuthError::Transport`] on network or decoding failures.
pub async fn login(credentials: &LoginRequest) -> Result<AuthResponse, AuthError> {
    post_auth("/login/", credentials).await
}

/// Create an account via `POST /api/register/`. Same contract as [`login`];
/// a successful registration does not sign the user in by itself.
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] on a non-success status and
/// [`AuthError::Transport`] on network or decoding failures.
pub async fn register(user_data: &RegisterRequest) -> Result<AuthResponse, AuthError> {
    post_auth("/register/", user_data).await
}

/// Single-shot JSON POST shared by both auth endpoints. No retries.
#[cfg(feature = "hydrate")]
async fn post_auth<T: serde::Serialize>(
    endpoint: &str,
    body: &T,
) -> Result<AuthResponse, AuthError> {
    let url = format!("{API_BASE}{endpoint}");
    let resp = gloo_net::http::Request::post(&url)
        .json(body)
        .map_err(|e| AuthError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Transport(e.to_string()))?;

    if !resp.ok() {
        let text = resp.text().await.unwrap_or_default();
        return Err(rejection(&text));
    }

    resp.json::<AuthResponse>()
        .await
        .map_err(|e| AuthError::Transport(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
async fn post_auth<T: serde::Serialize>(
    endpoint: &str,
    body: &T,
) -> Result<AuthResponse, AuthError> {
    let _ = (endpoint, body);
    Err(AuthError::Transport("not available on server".to_owned()))
}

/// Turn a non-success response body into a rejection, pulling the message
/// out of the `{"error": ...}` payload when one is present.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn rejection(body: &str) -> AuthError {
    let message = serde_json::from_str::<super::types::ApiError>(body)
        .map_or_else(|_| GENERIC_REJECTION.to_owned(), |e| e.error);
    AuthError::Rejected(message)
}
