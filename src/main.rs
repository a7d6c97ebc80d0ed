//! SSR host for the ServiceMarket client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `app::shell` for every route the app declares and serves the
//! hydrate bundle and stylesheet from the Leptos site root. The marketplace
//! REST backend is a separate service; browsers reach it directly at the
//! build-time `SERVICEMARKET_API_URL`.
//!
//! Optional:
//! - `PORT`: listen port, overriding the port of the Leptos `site-addr`

#[cfg(all(test, feature = "ssr"))]
#[path = "main_test.rs"]
mod main_test;

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let (app, mut addr) = host::router().expect("failed to build router");
    if let Ok(port) = std::env::var("PORT") {
        addr.set_port(port.parse().expect("invalid PORT"));
    }

    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");
    tracing::info!(%addr, "servicemarket client listening");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server failed");
}

#[cfg(feature = "ssr")]
mod host {
    use std::net::SocketAddr;
    use std::path::PathBuf;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use servicemarket_client::app::{App, shell};
    use tower_http::services::ServeDir;

    /// Leptos SSR routes plus the compiled `/pkg` assets, and the configured
    /// listen address.
    ///
    /// # Errors
    ///
    /// Returns an error string if the Leptos configuration cannot be loaded
    /// (a malformed `[package.metadata.leptos]` section).
    pub fn router() -> Result<(Router, SocketAddr), String> {
        let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
        let leptos_options = conf.leptos_options;
        let addr = leptos_options.site_addr;
        let routes = generate_route_list(App);

        let leptos_router = Router::new()
            .leptos_routes(&leptos_options, routes, {
                let opts = leptos_options.clone();
                move || shell(opts.clone())
            })
            .fallback(leptos_axum::file_and_error_handler(shell))
            .with_state(leptos_options.clone());

        let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
        let app = Router::new()
            .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
            .merge(leptos_router);
        Ok((app, addr))
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The browser build enters through `servicemarket_client::hydrate`.
}
