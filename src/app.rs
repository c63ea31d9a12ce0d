//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, history::HistoryPage, login::LoginPage, player::PlayerPage,
};
use crate::state::briefings::BriefingsState;
use crate::state::player::PlayerState;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, briefing-collection, and playback-transport
/// contexts and sets up client-side routing. There is exactly one of each
/// store per process; components read them via `expect_context`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let briefings = RwSignal::new(BriefingsState::default());
    let player = RwSignal::new(PlayerState::default());

    provide_context(session);
    provide_context(briefings);
    provide_context(player);

    // Restore a persisted session once at startup. Finding nothing is the
    // normal logged-out state; either way the loading flag comes down so
    // pages can decide about redirects.
    Effect::new(move || {
        match crate::state::session::restore() {
            Some((token, user)) => session.update(|s| s.establish(token, user)),
            None => session.update(SessionState::clear),
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/briefly.css"/>
        <Title text="Briefly"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("history") view=HistoryPage/>
                <Route path=(StaticSegment("player"), ParamSegment("id")) view=PlayerPage/>
            </Routes>
        </Router>
    }
}
