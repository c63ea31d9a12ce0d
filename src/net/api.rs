//! REST client for the Briefly API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Network` since all data
//! access happens in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Authenticated calls funnel failures through [`authed_failure`]: a 401
//! from *any* endpoint triggers the process-wide session teardown (clear +
//! redirect to sign-in) before `ApiError::Unauthorized` reaches the caller.
//! The credential-exchange endpoints use [`credentials_error`] instead: a
//! 401 there means this attempt was rejected, not that a session expired,
//! so it is surfaced inline on the form.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthResponse, Briefing, BriefingsResponse, CreateBriefingRequest, User};

/// API origin used when the host page does not override it.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Window global the host page may set to point at a different API origin.
#[cfg(feature = "hydrate")]
const BASE_URL_GLOBAL: &str = "BRIEFLY_API_URL";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Form body for the login endpoint (`application/x-www-form-urlencoded`).
#[cfg(any(test, feature = "hydrate"))]
fn login_form_body(email: &str, password: &str) -> String {
    format!(
        "username={}&password={}",
        urlencoding::encode(email),
        urlencoding::encode(password)
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Failure mapping for login/signup: rejected credentials stay inline.
#[cfg(any(test, feature = "hydrate"))]
fn credentials_error(status: u16, detail: String) -> ApiError {
    match status {
        400 | 401 | 422 => ApiError::BadRequest(detail),
        _ => ApiError::Http { status, detail },
    }
}

#[cfg(feature = "hydrate")]
fn base_url() -> String {
    // The host page may set `window.BRIEFLY_API_URL` to retarget the client.
    web_sys::window()
        .and_then(|window| {
            js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(BASE_URL_GLOBAL)).ok()
        })
        .and_then(|value| value.as_string())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
}

#[cfg(feature = "hydrate")]
async fn read_failure(resp: gloo_net::http::Response) -> (u16, String) {
    let status = resp.status();
    let fallback = resp.status_text();
    let body = resp.text().await.unwrap_or_default();
    (status, ApiError::detail_from_body(&body, &fallback))
}

/// Failure path for authenticated endpoints: applies the global 401 policy.
#[cfg(feature = "hydrate")]
async fn authed_failure(resp: gloo_net::http::Response) -> ApiError {
    let (status, detail) = read_failure(resp).await;
    let error = ApiError::from_status(status, detail);
    if error == ApiError::Unauthorized {
        crate::state::session::unauthorized_teardown();
    }
    error
}

/// `POST /auth/login`: form-encoded credential exchange.
///
/// # Errors
///
/// `BadRequest` for rejected or malformed credentials, `Network` when the
/// API is unreachable.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(&base_url(), "/auth/login"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(login_form_body(email, password))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let (status, detail) = read_failure(resp).await;
            return Err(credentials_error(status, detail));
        }
        resp.json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(server_stub())
    }
}

/// `POST /auth/signup`: create an account, returns a token like login.
///
/// # Errors
///
/// `BadRequest` for invalid input, `Network` when the API is unreachable.
pub async fn signup(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&endpoint(&base_url(), "/auth/signup"))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let (status, detail) = read_failure(resp).await;
            return Err(credentials_error(status, detail));
        }
        resp.json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(server_stub())
    }
}

/// `GET /users/me`: resolve the identity behind a bearer token.
///
/// # Errors
///
/// `Unauthorized` (after global teardown) for a rejected token.
pub async fn fetch_me(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(&base_url(), "/users/me"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(authed_failure(resp).await);
        }
        resp.json::<User>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(server_stub())
    }
}

/// `GET /users/{user_id}/briefings`: the user's briefings, newest first.
///
/// # Errors
///
/// `Unauthorized` (after global teardown) for a rejected token.
pub async fn fetch_briefings(token: &str, user_id: &str) -> Result<Vec<Briefing>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&base_url(), &format!("/users/{user_id}/briefings"));
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(authed_failure(resp).await);
        }
        let body: BriefingsResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.briefings)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id);
        Err(server_stub())
    }
}

/// `POST /breakdown/narration`: generate a briefing.
///
/// Generation latency is absorbed inside this one call; there is no job
/// polling and deliberately no client timeout. The submit control stays
/// disabled while this is in flight.
///
/// # Errors
///
/// `BadRequest` for an empty/invalid query, `Unauthorized` (after global
/// teardown) for a rejected token.
pub async fn create_briefing(
    token: &str,
    request: &CreateBriefingRequest,
) -> Result<Briefing, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(&base_url(), "/breakdown/narration"))
            .header("Authorization", &bearer(token))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(authed_failure(resp).await);
        }
        resp.json::<Briefing>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(server_stub())
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_stub() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}
