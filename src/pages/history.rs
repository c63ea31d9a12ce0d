//! History: the full briefing collection with search and persona filters.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::briefing_card::BriefingCard;
use crate::components::sidebar::Sidebar;
use crate::net::types::Briefing;
use crate::persona::Persona;
use crate::state::briefings::BriefingsState;
use crate::state::session::SessionState;

/// Case-insensitive filter over topic and transcript, optionally narrowed
/// to one persona. Both filters must pass.
fn matches_filters(briefing: &Briefing, search: &str, persona: Option<Persona>) -> bool {
    if let Some(persona) = persona {
        if briefing.persona != persona {
            return false;
        }
    }
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    briefing.query.to_lowercase().contains(&needle)
        || briefing.script.to_lowercase().contains(&needle)
}

/// Browsable archive of every briefing the user has generated.
#[component]
pub fn HistoryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let briefings = expect_context::<RwSignal<BriefingsState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(session, navigate);
    super::load_briefings(session, briefings);

    let search = RwSignal::new(String::new());
    let persona_filter = RwSignal::new(None::<Persona>);

    let filtered = move || {
        let needle = search.get();
        let persona = persona_filter.get();
        briefings.with(|state| {
            state
                .items
                .iter()
                .filter(|b| matches_filters(b, &needle, persona))
                .cloned()
                .collect::<Vec<_>>()
        })
    };
    let total = move || briefings.with(|state| state.items.len());

    view! {
        <div class="layout">
            <Sidebar current_page="history"/>

            <main class="history">
                <h1 class="history__title">"History"</h1>

                <div class="history__filters">
                    <input
                        class="history__search"
                        type="search"
                        placeholder="Search briefings"
                        prop:value=search
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />

                    <div class="history__personas">
                        <button
                            type="button"
                            class="history__persona-filter"
                            class:history__persona-filter--active=move || persona_filter.get().is_none()
                            on:click=move |_| persona_filter.set(None)
                        >
                            "All"
                        </button>
                        {Persona::ALL
                            .into_iter()
                            .map(|persona| {
                                view! {
                                    <button
                                        type="button"
                                        class="history__persona-filter"
                                        class:history__persona-filter--active=move || {
                                            persona_filter.get() == Some(persona)
                                        }
                                        on:click=move |_| persona_filter.set(Some(persona))
                                    >
                                        {persona.emoji()}
                                        " "
                                        {persona.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <Show when=move || briefings.with(BriefingsState::initial_loading)>
                    <p class="history__status">"Loading briefings..."</p>
                </Show>
                <Show when=move || briefings.with(|b| b.error.is_some())>
                    <p class="history__error">
                        {move || briefings.with(|b| b.error.clone().unwrap_or_default())}
                    </p>
                </Show>

                {move || {
                    let matches = filtered();
                    if matches.is_empty() {
                        let message = if total() == 0 {
                            "No briefings yet. Generate your first one from the dashboard."
                        } else {
                            "No briefings match these filters."
                        };
                        view! { <p class="history__empty">{message}</p> }.into_any()
                    } else {
                        view! {
                            <div class="history__list">
                                {matches
                                    .into_iter()
                                    .map(|briefing| view! { <BriefingCard briefing/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}
