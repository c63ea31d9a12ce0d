//! Serving binary: SSR rendering plus the edge route guard.
//!
//! All data operations go straight from the browser to the external Briefly
//! API; this process only renders the app shell, serves static assets, and
//! applies the route guard before any page code runs.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;

    use briefly::app::{App, shell};

    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).expect("leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = std::path::PathBuf::from(leptos_options.site_root.as_ref());
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(axum::middleware::from_fn(briefly::guard::middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "briefly listening");
    axum::serve(listener, app).await.expect("server failed");
}

// Browser builds enter through `lib.rs::hydrate`; this binary exists only
// for the ssr feature.
#[cfg(not(feature = "ssr"))]
fn main() {}
