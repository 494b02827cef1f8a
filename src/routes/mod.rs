//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON health endpoints and the Leptos SSR pages under
//! a single Axum router. Hydration assets are served from the site root's
//! `/pkg` directory.

pub mod health;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::PathBuf;

use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use coopcraft_client::app::{App, shell};
use coopcraft_client::state::nav::MenuConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// JSON API routes.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health::health).post(health::ping))
        .route("/healthz", get(health::healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes + Leptos SSR pages + hydration assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section or `LEPTOS_*` env).
pub fn app(state: AppState, menu: MenuConfig) -> Result<Router, RouterError> {
    let conf = get_configuration(None).map_err(|e| RouterError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;

    let route_menu = menu.clone();
    let routes = generate_route_list(move || view! { <App menu=route_menu.clone()/> });

    let fallback_menu = menu.clone();
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), menu.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback({
            let opts = leptos_options.clone();
            move |req: Request| render_not_found(opts.clone(), fallback_menu.clone(), req)
        })
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Render the full app shell for an unmatched path. The router's fallback
/// view fills the page body; the navigation panel still renders around it.
pub async fn render_not_found(options: LeptosOptions, menu: MenuConfig, req: Request) -> Response {
    let handler = leptos_axum::render_app_to_stream(move || shell(options.clone(), menu.clone()));
    let mut response = handler(req).await.into_response();
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}
