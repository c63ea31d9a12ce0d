//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Restricted pages apply identical unauthenticated redirect behavior as a
//! client-side backstop behind the edge route guard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Redirect to the sign-in view whenever the startup restore has finished
/// and no session is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate(crate::guard::LOGIN_PATH, NavigateOptions::default());
        }
    });
}
