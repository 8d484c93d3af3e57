//! HTTP route handlers and router assembly.
//!
//! Each binary gets its own router with per-route Cache-Control headers:
//! embedded static assets cache long with an immutable hint, the landing page
//! uses a short public TTL, and the counter page and health probes are never
//! cached so every hit reaches the origin.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request.

pub mod health;
pub mod home;
pub mod visits;

use axum::{middleware, routing::any, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::assets;
use crate::config::{CACHE_CONTROL_NO_STORE, CACHE_CONTROL_PAGE, CACHE_CONTROL_STATIC};
use crate::middleware::request_span_layer;
use crate::state::{CounterState, LandingState};

/// Creates the router for the counter server.
///
/// `/` increments and shows the count, `/healthz` is the liveness probe, and
/// every other path falls through to the default 404. Routes accept any
/// method.
pub fn counter_router(state: CounterState) -> Router {
    Router::new()
        .route("/", any(visits::index))
        .route("/healthz", any(health::healthz))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        .with_state(state)
        .layer(middleware::from_fn(request_span_layer))
}

/// Creates the router for the landing page server.
pub fn landing_router(state: LandingState) -> Router {
    // Landing page - short public cache, content is fixed per process
    let page_routes = Router::new().route("/", any(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PAGE),
        ),
    );

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", any(health::health)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ),
    );

    // Embedded static assets - long cache with immutable hint
    let static_routes = Router::new()
        .route("/static/{*path}", any(assets::serve))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC),
        ));

    Router::new()
        .merge(page_routes)
        .merge(health_routes)
        .merge(static_routes)
        .with_state(state)
        .layer(middleware::from_fn(request_span_layer))
}
