//! # Roster Server
//!
//! Serves the user roster over HTTP.
//!
//! `GET /` returns every user as a JSON array. The optional `sort` and
//! `order` query parameters sort the listing by a user field (`name` or
//! `id`) in `asc` or `desc` order. Rejected parameters produce a `400`
//! with `{"error": "..."}`; unexpected failures a `500` with the same shape.
//!
//! The server is built on Axum; the listing itself lives in `roster-core`.

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

use axum::{
    Router,
    http::{HeaderValue, Method},
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::infra::{app_state::AppState, config::CorsConfig};

pub fn create_app(state: AppState) -> Router {
    let router = with_middleware(
        Router::new().merge(routes::create_api_router()),
        &state.config().cors,
    );
    router.with_state(state)
}

/// Wrap `router` in the shared middleware stack.
pub fn with_middleware<S>(router: Router<S>, cors: &CorsConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    // Outer to inner: tracing, CORS, panic recovery
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(build_cors_layer(cors))
            .layer(CatchPanicLayer::custom(errors::panic_response)),
    )
}

fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if cors.allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
}
