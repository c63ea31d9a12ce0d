//! Playback adapter binding the transport state to an `<audio>` element.
//!
//! DESIGN
//! ======
//! The transport (`state::player`) is pure coordination state; this
//! component is the thin adapter around the native element. Commands flow
//! one way as fire-and-forget effects (play/pause/rate/volume are pushed,
//! never awaited); the element reports back through events (loadedmetadata,
//! timeupdate, ended, error). Advancing on completion is the caller's
//! policy via `on_next`, not the transport's.

use leptos::prelude::*;

use crate::net::types::Briefing;
use crate::state::player::{PlaybackPhase, PlayerState};
use crate::util::format::format_duration;

/// Transport controls for one briefing: play/pause, seek bar, rate cycle,
/// and mute toggle, plus optional previous/next controls.
#[component]
pub fn AudioPlayer(
    briefing: Briefing,
    #[prop(optional)] on_previous: Option<Callback<()>>,
    #[prop(optional)] on_next: Option<Callback<()>>,
) -> impl IntoView {
    let player = expect_context::<RwSignal<PlayerState>>();
    let audio_ref = NodeRef::<leptos::html::Audio>::new();
    let bar_ref = NodeRef::<leptos::html::Div>::new();

    // Bind the transport to this briefing; rate and volume carry over from
    // the previous track. Idempotent for the current briefing, so a
    // re-render of this component mid-playback does not restart the track.
    player.update(|p| p.ensure_bound(&briefing.id));

    let on_loadedmetadata = {
        #[cfg(feature = "hydrate")]
        {
            move |_: leptos::ev::Event| {
                if let Some(el) = audio_ref.get_untracked() {
                    player.update(|p| p.metadata_loaded(el.duration()));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_: leptos::ev::Event| {}
        }
    };

    let on_timeupdate = {
        #[cfg(feature = "hydrate")]
        {
            move |_: leptos::ev::Event| {
                if let Some(el) = audio_ref.get_untracked() {
                    player.update(|p| p.progress(el.current_time()));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_: leptos::ev::Event| {}
        }
    };

    let on_ended = move |_: leptos::ev::Event| {
        player.update(PlayerState::ended);
        if let Some(callback) = on_next {
            callback.run(());
        }
    };

    let on_error = move |_: leptos::ev::ErrorEvent| {
        player.update(PlayerState::load_failed);
    };

    // Mirror transport state onto the element. The commands are
    // fire-and-forget: the transport reacts to the events the element emits
    // afterwards rather than awaiting completion.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let playing = player.with(|p| p.is_playing());
            if let Some(el) = audio_ref.get() {
                if playing {
                    let _ = el.play();
                } else {
                    let _ = el.pause();
                }
            }
        });
        Effect::new(move || {
            let rate = player.with(|p| p.rate);
            if let Some(el) = audio_ref.get() {
                el.set_playback_rate(rate);
            }
        });
        Effect::new(move || {
            let volume = player.with(|p| p.volume);
            if let Some(el) = audio_ref.get() {
                el.set_volume(volume);
            }
        });
    }

    let on_bar_click = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                let Some(bar) = bar_ref.get_untracked() else {
                    return;
                };
                let rect = bar.get_bounding_client_rect();
                if rect.width() <= 0.0 {
                    return;
                }
                let fraction =
                    ((f64::from(ev.client_x()) - rect.left()) / rect.width()).clamp(0.0, 1.0);
                let target = player.with_untracked(|p| p.duration.unwrap_or(0.0)) * fraction;
                player.update(|p| {
                    if let Some(applied) = p.seek(target) {
                        if let Some(el) = audio_ref.get_untracked() {
                            el.set_current_time(applied);
                        }
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let can_start = move || {
        matches!(
            player.with(|p| p.phase),
            PlaybackPhase::Ready
                | PlaybackPhase::Playing
                | PlaybackPhase::Paused
                | PlaybackPhase::Ended
        )
    };
    let failed = move || player.with(|p| p.phase) == PlaybackPhase::Failed;
    let progress_percent = move || {
        player.with(|p| match p.duration {
            Some(duration) if duration > 0.0 => (p.position / duration) * 100.0,
            _ => 0.0,
        })
    };
    let position_label = move || player.with(|p| format_duration(p.position));
    let duration_label = move || player.with(|p| format_duration(p.duration.unwrap_or(0.0)));
    let rate_label = move || player.with(|p| format!("{}x", p.rate));
    let mute_label = move || {
        if player.with(PlayerState::is_muted) {
            "Unmute"
        } else {
            "Mute"
        }
    };

    view! {
        <div class="audio-player">
            <audio
                node_ref=audio_ref
                src=briefing.audio_url.clone()
                preload="auto"
                on:loadedmetadata=on_loadedmetadata
                on:timeupdate=on_timeupdate
                on:ended=on_ended
                on:error=on_error
            ></audio>

            <Show when=failed>
                <p class="audio-player__error">
                    "Audio failed to load. Pick another briefing or reopen this one to retry."
                </p>
            </Show>

            <div class="audio-player__bar" node_ref=bar_ref on:click=on_bar_click>
                <div
                    class="audio-player__bar-fill"
                    style=move || format!("width: {:.2}%;", progress_percent())
                ></div>
            </div>

            <div class="audio-player__times">
                <span>{position_label}</span>
                <span>{duration_label}</span>
            </div>

            <div class="audio-player__controls">
                {on_previous
                    .map(|callback| {
                        view! {
                            <button class="audio-player__skip" on:click=move |_| callback.run(())>
                                "Previous"
                            </button>
                        }
                    })}

                <button
                    class="audio-player__toggle"
                    disabled=move || !can_start()
                    on:click=move |_| player.update(PlayerState::toggle_play)
                >
                    {move || if player.with(PlayerState::is_playing) { "Pause" } else { "Play" }}
                </button>

                {on_next
                    .map(|callback| {
                        view! {
                            <button class="audio-player__skip" on:click=move |_| callback.run(())>
                                "Next"
                            </button>
                        }
                    })}

                <span class="audio-player__spacer"></span>

                <button
                    class="audio-player__rate"
                    on:click=move |_| {
                        player.update(|p| {
                            p.cycle_rate();
                        });
                    }
                >
                    {rate_label}
                </button>

                <button
                    class="audio-player__mute"
                    on:click=move |_| player.update(PlayerState::toggle_mute)
                >
                    {mute_label}
                </button>
            </div>
        </div>
    }
}
