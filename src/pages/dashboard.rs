//! Dashboard: topic form, persona pick, and the most recent briefings.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::briefing_card::BriefingCard;
use crate::components::persona_selector::PersonaSelector;
use crate::components::sidebar::Sidebar;
use crate::net::api;
use crate::net::types::CreateBriefingRequest;
use crate::persona::Persona;
use crate::state::briefings::BriefingsState;
use crate::state::session::SessionState;

/// Validate the briefing topic before submitting.
fn validate_query(query: &str) -> Result<String, &'static str> {
    let query = query.trim();
    if query.is_empty() {
        return Err("Enter a topic to brief.");
    }
    Ok(query.to_owned())
}

/// Display name for the greeting: the part of the email before the `@`.
fn greeting_name(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Main page: generate a new briefing, see the latest ones.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let briefings = expect_context::<RwSignal<BriefingsState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(session, navigate.clone());
    super::load_briefings(session, briefings);

    let query = RwSignal::new(String::new());
    let persona = RwSignal::new(Persona::default());
    let generating = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let greeting = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .map_or_else(
                    || "Welcome back".to_owned(),
                    |user| format!("Welcome back, {}", greeting_name(&user.email)),
                )
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Generation has no client timeout; the guard below is what keeps a
        // second submit from going out while one is in flight.
        if generating.get_untracked() {
            return;
        }
        let topic = match validate_query(&query.get_untracked()) {
            Ok(topic) => topic,
            Err(message) => {
                form_error.set(Some(message.to_owned()));
                return;
            }
        };
        let Some(token) = session.with_untracked(|s| s.token.clone()) else {
            return;
        };
        generating.set(true);
        form_error.set(None);
        let request = CreateBriefingRequest {
            query: topic,
            persona: persona.get_untracked(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::create_briefing(&token, &request).await {
                Ok(briefing) => {
                    let id = briefing.id.clone();
                    briefings.update(|b| b.prepend(briefing));
                    query.set(String::new());
                    generating.set(false);
                    navigate(&format!("/player/{id}"), NavigateOptions::default());
                }
                Err(e) => {
                    form_error.set(Some(e.to_string()));
                    generating.set(false);
                }
            }
        });
    };

    let recent =
        move || briefings.with(|state| state.items.iter().take(6).cloned().collect::<Vec<_>>());

    view! {
        <div class="layout">
            <Sidebar current_page="dashboard"/>

            <main class="dashboard">
                <h1 class="dashboard__greeting">{greeting}</h1>

                <form class="dashboard__form" on:submit=on_submit>
                    <label class="dashboard__query-label">
                        "What do you want to hear about?"
                        <textarea
                            class="dashboard__query"
                            placeholder="e.g. What's happening with AI regulation?"
                            prop:value=query
                            disabled=move || generating.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <PersonaSelector
                        selected=persona
                        disabled=Signal::derive(move || generating.get())
                    />

                    <Show when=move || form_error.get().is_some()>
                        <p class="dashboard__error">
                            {move || form_error.get().unwrap_or_default()}
                        </p>
                    </Show>

                    <button
                        class="dashboard__submit"
                        type="submit"
                        disabled=move || generating.get()
                    >
                        {move || if generating.get() { "Generating..." } else { "Generate briefing" }}
                    </button>
                </form>

                <section class="dashboard__recent">
                    <h2>"Recent briefings"</h2>
                    <Show when=move || briefings.with(BriefingsState::initial_loading)>
                        <p class="dashboard__status">"Loading briefings..."</p>
                    </Show>
                    <Show when=move || briefings.with(|b| b.error.is_some())>
                        <p class="dashboard__error">
                            {move || briefings.with(|b| b.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    {move || {
                        recent()
                            .into_iter()
                            .map(|briefing| view! { <BriefingCard briefing/> })
                            .collect::<Vec<_>>()
                    }}
                </section>
            </main>
        </div>
    }
}
