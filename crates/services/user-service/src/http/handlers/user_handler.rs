//! User handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use common::{AppResult, OptionExt};
use domain::UserResponse;

use crate::http::extractors::ValidatedJson;
use crate::http::state::AppState;

/// User creation request with validation
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address
    #[validate(email(message = "Email must be valid"))]
    pub email: String,
    /// Age in years
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i32,
}

/// Query parameters for email lookup
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Query parameters for a promotional dispatch
#[derive(Debug, Deserialize)]
pub struct PromotionalQuery {
    pub content: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/by-email", get(get_user_by_email))
        .route("/promotional-emails", post(send_promotional_emails))
        .route("/:id", get(get_user).delete(delete_user))
}

/// Register a new user
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .users
        .create_user(payload.name, payload.email, payload.age)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    let user = state.users.get_user(id).await?.ok_or_not_found()?;
    Ok(Json(UserResponse::from(user)))
}

/// Get user by email address
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .users
        .get_user_by_email(&query.email)
        .await?
        .ok_or_not_found()?;
    Ok(Json(UserResponse::from(user)))
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.users.list_users().await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// Delete user by ID
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if state.users.delete_user(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Send a promotional email to all eligible users
pub async fn send_promotional_emails(
    State(state): State<AppState>,
    Query(query): Query<PromotionalQuery>,
) -> AppResult<StatusCode> {
    state
        .users
        .send_promotional_email_to_eligible_users(&query.content)
        .await?;
    Ok(StatusCode::OK)
}
