//! Integration tests for API endpoints.
//!
//! These tests use a mock service to exercise routing, payload validation,
//! and status-code mapping without a database.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{User, UserEmail};
use user_service_lib::http::{create_router, AppState};
use user_service_lib::service::UserService;

const KNOWN_ID: Uuid = Uuid::from_u128(0x550e8400_e29b_41d4_a716_446655440000);

/// Mock user service that returns predefined responses
struct MockUserService;

impl MockUserService {
    fn known_user() -> User {
        User::new("John Doe", UserEmail::parse("john@example.com").unwrap(), 25)
            .unwrap()
            .with_id(KNOWN_ID)
    }
}

#[async_trait]
impl UserService for MockUserService {
    async fn create_user(&self, name: String, email: String, age: i32) -> AppResult<User> {
        if email == "taken@example.com" {
            return Err(AppError::conflict("Email"));
        }

        let email = UserEmail::parse(&email)?;
        let user = User::new(name, email, age)?;
        Ok(user.with_id(Uuid::new_v4()))
    }

    async fn get_user(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok((id == KNOWN_ID).then(Self::known_user))
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let email = UserEmail::parse(email)?;
        Ok((email.as_str() == "john@example.com").then(Self::known_user))
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(vec![
            Self::known_user(),
            User::new("Jane Doe", UserEmail::parse("jane@example.com").unwrap(), 16)
                .unwrap()
                .with_id(Uuid::new_v4()),
        ])
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<bool> {
        Ok(id == KNOWN_ID)
    }

    async fn send_promotional_email_to_eligible_users(&self, _content: &str) -> AppResult<()> {
        Ok(())
    }
}

fn test_app() -> axum::Router {
    create_router(AppState::new(Arc::new(MockUserService)))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_create_user_returns_created() {
    let request = post_json(
        "/api/users",
        json!({"name": "John Doe", "email": "john@example.com", "age": 25}),
    );
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["name"], "John Doe");
    assert_eq!(body["email"], "john@example.com");
    assert_eq!(body["is_adult"], true);
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn test_create_user_with_invalid_email_is_bad_request() {
    let request = post_json(
        "/api/users",
        json!({"name": "John Doe", "email": "not-an-email", "age": 25}),
    );
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_user_with_out_of_range_age_is_bad_request() {
    let request = post_json(
        "/api/users",
        json!({"name": "John Doe", "email": "john@example.com", "age": 200}),
    );
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_with_taken_email_is_conflict() {
    let request = post_json(
        "/api/users",
        json!({"name": "John Doe", "email": "taken@example.com", "age": 25}),
    );
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_get_user_by_id() {
    let response = test_app()
        .oneshot(get(&format!("/api/users/{KNOWN_ID}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["age"], 25);
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let response = test_app()
        .oneshot(get(&format!("/api/users/{}", Uuid::new_v4())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_users() {
    let response = test_app().oneshot(get("/api/users")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[1]["is_adult"], false);
}

#[tokio::test]
async fn test_get_user_by_email() {
    let response = test_app()
        .oneshot(get("/api/users/by-email?email=john@example.com"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_user_by_malformed_email_is_bad_request() {
    let response = test_app()
        .oneshot(get("/api/users/by-email?email=not-an-email"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_user_is_no_content() {
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/users/{KNOWN_ID}"))
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_unknown_user_is_not_found() {
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/users/{}", Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_send_promotional_emails() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/users/promotional-emails?content=Summer%20sale")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_check() {
    let response = test_app().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}
