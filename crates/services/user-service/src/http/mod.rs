//! HTTP transport layer - routes, handlers, extractors, state.

pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
