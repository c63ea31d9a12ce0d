//! Player: transport controls, transcript, and sharing for one briefing.

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::audio_player::AudioPlayer;
use crate::components::sidebar::Sidebar;
use crate::state::briefings::BriefingsState;
use crate::state::session::SessionState;
use crate::util::format::format_created_at;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PlayerViewState {
    Loading,
    NotFound,
    Ready,
}

/// What the page shows for the requested id. A missing briefing only counts
/// as not-found once the collection has actually been fetched; before that
/// the page reports loading.
fn view_state(fetched: bool, found: bool) -> PlayerViewState {
    if found {
        PlayerViewState::Ready
    } else if fetched {
        PlayerViewState::NotFound
    } else {
        PlayerViewState::Loading
    }
}

/// Human label for where a briefing was generated, when the API recorded it.
fn location_label(city: Option<&str>, country: Option<&str>) -> Option<String> {
    match (city, country) {
        (Some(city), Some(country)) => Some(format!("{city}, {country}")),
        (Some(only), None) | (None, Some(only)) => Some(only.to_owned()),
        (None, None) => None,
    }
}

/// Playback page for one briefing, addressed by id in the route.
#[component]
pub fn PlayerPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let briefings = expect_context::<RwSignal<BriefingsState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    crate::util::auth::install_unauth_redirect(session, navigate.clone());
    super::load_briefings(session, briefings);

    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    // Memos keep collection-store churn (loading flips, content-equal
    // refreshes) from rebuilding the playback subtree below.
    let current = Memo::new(move |_| briefings.with(|state| state.find(&id.get()).cloned()));
    let fetched = Memo::new(move |_| briefings.with(|b| b.fetched));

    let show_transcript = RwSignal::new(false);
    let copied = RwSignal::new(false);

    // Completion advances to the next (older) briefing when one exists;
    // otherwise playback simply stays ended.
    let on_next = {
        let navigate = navigate.clone();
        Callback::new(move |()| {
            let target = briefings.with_untracked(|state| state.next_id(&id.get_untracked()));
            if let Some(target) = target {
                navigate(&format!("/player/{target}"), NavigateOptions::default());
            }
        })
    };
    let on_previous = {
        let navigate = navigate.clone();
        Callback::new(move |()| {
            let target = briefings.with_untracked(|state| state.previous_id(&id.get_untracked()));
            if let Some(target) = target {
                navigate(&format!("/player/{target}"), NavigateOptions::default());
            }
        })
    };

    let on_share = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(href) = window.location().href() {
                    let _ = window.navigator().clipboard().write_text(&href);
                    copied.set(true);
                }
            }
        }
    };

    view! {
        <div class="layout">
            <Sidebar current_page="player"/>

            <main class="player">
                <Show when=move || briefings.with(|b| b.error.is_some())>
                    <p class="player__error">
                        {move || briefings.with(|b| b.error.clone().unwrap_or_default())}
                    </p>
                </Show>

                {move || {
                    let briefing = current.get();
                    let state = view_state(fetched.get(), briefing.is_some());
                    match (state, briefing) {
                        (PlayerViewState::Ready, Some(briefing)) => {
                            let location = location_label(
                                briefing.city.as_deref(),
                                briefing.country.as_deref(),
                            );
                            let created = format_created_at(&briefing.created_at);
                            let download_url = briefing.audio_url.clone();
                            let script = briefing.script.clone();
                            view! {
                                <article class="player__briefing">
                                    <header class="player__header">
                                        <span class="player__persona">
                                            {briefing.persona.emoji()}
                                            " "
                                            {briefing.persona.label()}
                                        </span>
                                        <h1 class="player__query">{briefing.query.clone()}</h1>
                                        <p class="player__meta">
                                            {created}
                                            {location
                                                .map(|label| {
                                                    view! {
                                                        <span class="player__location">" · " {label}</span>
                                                    }
                                                })}
                                        </p>
                                    </header>

                                    <AudioPlayer
                                        briefing=briefing
                                        on_previous=on_previous
                                        on_next=on_next
                                    />

                                    <div class="player__actions">
                                        <button class="player__share" on:click=on_share>
                                            {move || if copied.get() { "Link copied" } else { "Share" }}
                                        </button>
                                        <a class="player__download" href=download_url download="">
                                            "Download audio"
                                        </a>
                                        <button
                                            class="player__transcript-toggle"
                                            on:click=move |_| show_transcript.update(|v| *v = !*v)
                                        >
                                            {move || {
                                                if show_transcript.get() {
                                                    "Hide transcript"
                                                } else {
                                                    "Show transcript"
                                                }
                                            }}
                                        </button>
                                    </div>

                                    <Show when=move || show_transcript.get()>
                                        <p class="player__transcript">{script.clone()}</p>
                                    </Show>
                                </article>
                            }
                                .into_any()
                        }
                        (PlayerViewState::NotFound, _) => {
                            view! {
                                <div class="player__missing">
                                    <h1>"Briefing not found"</h1>
                                    <p>"It may belong to another account or have been removed."</p>
                                    <a href="/dashboard">"Back to dashboard"</a>
                                </div>
                            }
                                .into_any()
                        }
                        (PlayerViewState::Loading | PlayerViewState::Ready, _) => {
                            view! { <p class="player__status">"Loading briefing..."</p> }.into_any()
                        }
                    }
                }}
            </main>
        </div>
    }
}
