//! Sign-in and sign-up page.
//!
//! AUTH FLOW
//! =========
//! Token-first: exchange credentials for a bearer token, resolve the user
//! behind it with `/users/me`, then persist and install the pair atomically.
//! The session signal never holds a token without its user.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::state::session::SessionState;

/// Validate the credential form before hitting the network.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter a password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Post-login destination from the `redirect` query parameter. Only in-app
/// paths are honored; anything else falls back to the dashboard.
fn redirect_target(param: Option<String>) -> String {
    match param {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => crate::guard::HOME_PATH.to_owned(),
    }
}

/// Credential form with a sign-in/sign-up mode toggle.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let signup_mode = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Already signed in: skip the form entirely.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = session.get();
            if !state.loading && state.is_authenticated() {
                navigate(crate::guard::HOME_PATH, NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        busy.set(true);
        error.set(None);
        let destination = redirect_target(query.with_untracked(|q| q.get("redirect")));
        let is_signup = signup_mode.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let auth = if is_signup {
                api::signup(&email_value, &password_value).await
            } else {
                api::login(&email_value, &password_value).await
            };
            let resolved = match auth {
                Ok(auth) => api::fetch_me(&auth.access_token)
                    .await
                    .map(|user| (auth.access_token, user)),
                Err(e) => Err(e),
            };
            match resolved {
                Ok((token, user)) => {
                    crate::state::session::persist(&token, &user);
                    session.update(|s| s.establish(token, user));
                    navigate(&destination, NavigateOptions::default());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <main class="login">
            <div class="login__panel">
                <h1 class="login__title">"Briefly"</h1>
                <p class="login__tagline">"Audio briefings on any topic, narrated your way."</p>

                <form class="login__form" on:submit=on_submit>
                    <label class="login__field">
                        "Email"
                        <input
                            type="email"
                            prop:value=email
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login__field">
                        "Password"
                        <input
                            type="password"
                            prop:value=password
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <Show when=move || error.get().is_some()>
                        <p class="login__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>

                    <button class="login__submit" type="submit" disabled=move || busy.get()>
                        {move || {
                            if busy.get() {
                                "Working..."
                            } else if signup_mode.get() {
                                "Create account"
                            } else {
                                "Sign in"
                            }
                        }}
                    </button>
                </form>

                <button
                    class="login__mode-toggle"
                    type="button"
                    on:click=move |_| {
                        signup_mode.update(|mode| *mode = !*mode);
                        error.set(None);
                    }
                >
                    {move || {
                        if signup_mode.get() {
                            "Already have an account? Sign in"
                        } else {
                            "New here? Create an account"
                        }
                    }}
                </button>
            </div>
        </main>
    }
}
