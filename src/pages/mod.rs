//! Route-level page components.

pub mod dashboard;
pub mod history;
pub mod login;
pub mod player;

use leptos::prelude::*;

use crate::state::briefings::BriefingsState;
use crate::state::session::SessionState;

/// Fetch the briefing collection once per page mount, as soon as a session
/// is available. The guard keeps collection updates from re-triggering the
/// fetch; navigating between pages refreshes it.
pub(crate) fn load_briefings(
    session: RwSignal<SessionState>,
    briefings: RwSignal<BriefingsState>,
) {
    let started = StoredValue::new(false);
    Effect::new(move || {
        let Some((token, user_id)) =
            session.with(|s| s.token.clone().zip(s.user.as_ref().map(|u| u.id.clone())))
        else {
            return;
        };
        if started.get_value() {
            return;
        }
        started.set_value(true);
        briefings.update(|b| b.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_briefings(&token, &user_id).await {
                Ok(items) => briefings.update(|b| b.replace_all(items)),
                Err(e) => briefings.update(|b| b.error = Some(e.to_string())),
            }
            briefings.update(|b| b.loading = false);
        });
    });
}
