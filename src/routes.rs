//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Redirect to `/login`
//! - `GET  /health`      - Health check: user directory, session store (public)
//! - `/login`, `/logout` - Login gate (public)
//! - `/dashboard/*`      - Web UI (session cookie required, else redirect)
//! - `/api/*`            - JSON API (session cookie required, else 401)
//! - `/api/dev/*`        - Developer helpers (only with `DEV_TOOLS=true`)
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Authentication** - Session cookie, resolved per adapter
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::response::Redirect;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds every route of the portal without rate limiting or path
/// normalization.
///
/// Used directly by integration tests, which have no peer address for the
/// rate limiter to key on.
pub fn portal_router(state: AppState) -> Router {
    let mut api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .merge(api::routes::public_routes());

    if state.config.dev_tools {
        ::tracing::warn!("Developer endpoints enabled under /api/dev");
        api_router = api_router.merge(api::routes::dev_routes());
    }

    let web_router = web::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ))
        .merge(web::routes::public_routes());

    Router::new()
        .route("/", get(|| async { Redirect::to("/login") }))
        .route("/health", get(health_handler))
        .merge(web_router)
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}

/// Constructs the production router: [`portal_router`] plus rate limiting,
/// tracing and trailing slash normalization.
///
/// Must be served with connect info so the rate limiter can read the peer
/// address.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let limiter = rate_limit::layer(&state.config);
    let router = portal_router(state)
        .layer(limiter)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
