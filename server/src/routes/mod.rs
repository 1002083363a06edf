//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR pages, the compiled bundle under
//! `/pkg`, files from the public asset directory, and `/healthz`. Paths that
//! match none of these render the site's not-found page with a 404.


use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Routes that do not depend on Leptos configuration.
pub(crate) fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Static files from `dir`; missing files yield an empty 404.
pub(crate) fn public_assets(dir: &Path) -> ServeDir {
    ServeDir::new(dir).append_index_html_on_directories(false)
}

/// Full site router: Leptos SSR + `/pkg` bundle + public assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(site_router(config, conf.leptos_options))
}

/// Assemble the router from already-loaded Leptos options.
pub(crate) fn site_router(config: &ServerConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(site::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || site::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Bundle output written by cargo-leptos.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let not_found = any(file_and_error_handler::<LeptosOptions, _>(site::app::shell)).with_state(leptos_options);
    let public = public_assets(&config.public_dir).not_found_service(not_found);

    let router = health_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(public)
        .layer(TraceLayer::new_for_http());

    if config.compression { router.layer(CompressionLayer::new()) } else { router }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
