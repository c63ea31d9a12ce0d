//! Route guard evaluated at the edge, before any page code runs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard only checks for the *presence* of the session cookie written by
//! `state::session`. An expired or forged cookie passes here and is rejected
//! later by the API's unauthorized handling: the guard is a cheap UX
//! redirect, the API is the authoritative check.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::AUTH_COOKIE;

/// Path prefixes that require an authenticated session.
pub const RESTRICTED_PREFIXES: [&str; 3] = ["/dashboard", "/history", "/player"];

/// Default landing view for an authenticated user.
pub const HOME_PATH: &str = "/dashboard";

/// Sign-in view.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of guarding one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    /// Send to the sign-in view, carrying the originally requested path as
    /// the return target.
    ToLogin { redirect: String },
    /// Send an already signed-in visitor away from the sign-in view.
    ToHome,
}

/// Decide what to do with a navigation, given the requested path and whether
/// the session cookie is present.
pub fn decide(path: &str, has_session_cookie: bool) -> RouteDecision {
    let restricted = RESTRICTED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix));

    if restricted && !has_session_cookie {
        return RouteDecision::ToLogin {
            redirect: path.to_owned(),
        };
    }
    if path == LOGIN_PATH && has_session_cookie {
        return RouteDecision::ToHome;
    }
    RouteDecision::Allow
}

/// Axum middleware applying [`decide`] to every request before Leptos routing.
#[cfg(feature = "ssr")]
pub async fn middleware(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    use axum::response::{IntoResponse, Redirect};
    use axum_extra::extract::cookie::{Cookie, CookieJar};

    let jar = CookieJar::from_headers(req.headers());
    let has_cookie = jar
        .get(AUTH_COOKIE)
        .map(Cookie::value)
        .is_some_and(|v| !v.is_empty());
    let path = req.uri().path().to_owned();

    match decide(&path, has_cookie) {
        RouteDecision::Allow => next.run(req).await,
        RouteDecision::ToLogin { redirect } => {
            tracing::debug!(%path, "unauthenticated access, redirecting to login");
            let target = format!("{LOGIN_PATH}?redirect={}", urlencoding::encode(&redirect));
            Redirect::temporary(&target).into_response()
        }
        RouteDecision::ToHome => Redirect::temporary(HOME_PATH).into_response(),
    }
}
