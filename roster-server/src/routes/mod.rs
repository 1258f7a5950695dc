use axum::{Router, routing::get};

use crate::{handlers::list_users_handler, infra::app_state::AppState};

/// Path of the user listing.
pub const USERS: &str = "/";

/// Create the API router
pub fn create_api_router() -> Router<AppState> {
    Router::new().route(USERS, get(list_users_handler))
}
