//! Navigation sidebar with recent briefings and sign-out.

use leptos::prelude::*;

use crate::state::briefings::BriefingsState;
use crate::state::session::SessionState;
use crate::util::format::truncate;

/// App-wide sidebar: nav links, the most recent briefings, and sign-out.
#[component]
pub fn Sidebar(current_page: &'static str) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let briefings = expect_context::<RwSignal<BriefingsState>>();

    let email = move || {
        session
            .get()
            .user
            .map(|user| user.email)
            .unwrap_or_default()
    };

    let recent = move || {
        briefings.with(|state| {
            state
                .items
                .iter()
                .take(5)
                .map(|b| (b.id.clone(), truncate(&b.query, 40)))
                .collect::<Vec<_>>()
        })
    };

    let on_sign_out = move |_| {
        crate::state::session::clear_persisted();
        session.update(SessionState::clear);
        // Hard navigation rather than a client-side route change: a reload
        // drops every in-memory store along with the session.
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(crate::guard::LOGIN_PATH);
            }
        }
    };

    view! {
        <aside class="sidebar">
            <a class="sidebar__brand" href="/dashboard">
                "Briefly"
            </a>

            <nav class="sidebar__nav">
                <a
                    href="/dashboard"
                    class="sidebar__link"
                    class:sidebar__link--active=move || current_page == "dashboard"
                >
                    "Dashboard"
                </a>
                <a
                    href="/history"
                    class="sidebar__link"
                    class:sidebar__link--active=move || current_page == "history"
                >
                    "History"
                </a>
            </nav>

            <div class="sidebar__recent">
                <span class="sidebar__recent-title">"Recent briefings"</span>
                {move || {
                    recent()
                        .into_iter()
                        .map(|(id, query)| {
                            let href = format!("/player/{id}");
                            view! {
                                <a class="sidebar__recent-item" href=href>
                                    {query}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="sidebar__footer">
                <span class="sidebar__email">{email}</span>
                <button class="sidebar__sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </div>
        </aside>
    }
}
