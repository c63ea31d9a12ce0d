//! Persisted session store: bearer token plus resolved user identity.
//!
//! PERSISTENCE
//! ===========
//! Token and user mirror to localStorage so a reload restores the session;
//! the token additionally mirrors into the `auth_token` cookie the route
//! guard reads. `persist`/`clear_persisted` keep all three in lockstep;
//! the cookie name constant lives here and is the only channel shared with
//! the guard.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::types::User;

/// Cookie read by the route guard; written only by this module.
pub const AUTH_COOKIE: &str = "auth_token";

/// localStorage key for the bearer token.
pub const TOKEN_KEY: &str = "auth_token";

/// localStorage key for the serialized user profile.
pub const USER_KEY: &str = "user";

/// Session cookie lifetime: 7 days.
pub const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 7;

/// In-memory session state provided via context.
///
/// Token and user are set and cleared together: a token without a resolved
/// user only exists transiently inside the login flow, never in this struct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    /// True until the startup restore has run, so pages do not redirect to
    /// login before a persisted session had a chance to load.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// Atomically install a token/user pair.
    pub fn establish(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
    }

    /// Empty the session (sign-out or startup restore finding nothing).
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn establish_cookie(token: &str) -> String {
    format!("{AUTH_COOKIE}={token}; path=/; max-age={COOKIE_MAX_AGE_SECS}")
}

#[cfg(any(test, feature = "hydrate"))]
fn expire_cookie() -> String {
    format!("{AUTH_COOKIE}=; path=/; max-age=0")
}

#[cfg(any(test, feature = "hydrate"))]
fn encode_user(user: &User) -> String {
    // Infallible for this struct; the empty-string fallback would fail
    // decode_user and read back as a missing user, i.e. logged out.
    serde_json::to_string(user).unwrap_or_default()
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

/// Read a persisted session from durable storage.
///
/// Returns `None` when either key is missing or unreadable, which is the
/// expected logged-out state, not an error.
pub fn restore() -> Option<(String, User)> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        let raw_user = storage.get_item(USER_KEY).ok()??;
        let user = decode_user(&raw_user)?;
        Some((token, user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a session to durable storage and mirror the token into the guard
/// cookie. Call before updating the in-memory signal so every layer agrees.
pub fn persist(token: &str, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
                let _ = storage.set_item(USER_KEY, &encode_user(user));
            }
        }
        write_cookie(&establish_cookie(token));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Remove the persisted session and expire the guard cookie.
pub fn clear_persisted() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(USER_KEY);
            }
        }
        write_cookie(&expire_cookie());
    }
}

#[cfg(feature = "hydrate")]
fn write_cookie(value: &str) {
    use wasm_bindgen::JsCast;

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(html_document) = document.dyn_into::<web_sys::HtmlDocument>() {
            let _ = html_document.set_cookie(value);
        }
    }
}

static UNAUTHORIZED_LATCH: AtomicBool = AtomicBool::new(false);

/// Single-shot latch: true only for the first caller.
fn begin_teardown(latch: &AtomicBool) -> bool {
    !latch.swap(true, Ordering::SeqCst)
}

/// Process-wide policy for a 401 from any endpoint: clear the persisted
/// session and hard-navigate to the sign-in view. Concurrent failures
/// produce exactly one clear and one redirect; the navigation reloads the
/// app, which resets the latch for the next session.
pub fn unauthorized_teardown() {
    if !begin_teardown(&UNAUTHORIZED_LATCH) {
        return;
    }
    clear_persisted();
    #[cfg(feature = "hydrate")]
    {
        log::warn!("unauthorized response, clearing session");
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(crate::guard::LOGIN_PATH);
        }
    }
}
