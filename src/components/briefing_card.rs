//! Clickable card for one briefing in history and sidebar lists.

use leptos::prelude::*;

use crate::net::types::Briefing;
use crate::util::format::{format_created_at, truncate};

/// A card linking to the player for one briefing: persona badge, query, and
/// relative creation date.
#[component]
pub fn BriefingCard(briefing: Briefing) -> impl IntoView {
    let href = format!("/player/{}", briefing.id);
    let persona = briefing.persona;
    let badge_style = format!(
        "background-color: {color}20; border: 2px solid {color}40;",
        color = persona.color()
    );
    let query = truncate(&briefing.query, 80);
    let created = format_created_at(&briefing.created_at);

    view! {
        <a class="briefing-card" href=href>
            <span class="briefing-card__badge" style=badge_style>
                {persona.emoji()}
            </span>
            <span class="briefing-card__body">
                <span class="briefing-card__query">{query}</span>
                <span class="briefing-card__meta">
                    <span class="briefing-card__persona">{persona.label()}</span>
                    <span class="briefing-card__date">{created}</span>
                </span>
            </span>
        </a>
    }
}
