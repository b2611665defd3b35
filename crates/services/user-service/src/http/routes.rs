//! Route definitions.

use axum::Router;

use crate::http::handlers::{health_routes, user_routes};
use crate::http::state::AppState;

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/api/users", user_routes())
        .with_state(state)
}
