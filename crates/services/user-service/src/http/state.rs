//! Shared application state.

use std::sync::Arc;

use crate::service::UserService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub users: Arc<dyn UserService>,
}

impl AppState {
    /// Create new application state
    pub fn new(users: Arc<dyn UserService>) -> Self {
        Self { users }
    }
}
