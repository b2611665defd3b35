//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::constants::{ADULT_AGE, MAX_USER_AGE, MIN_USER_AGE};
use crate::email::UserEmail;
use crate::error::{DomainError, DomainResult};

/// User domain entity.
///
/// Fields are private so a `User` can only come out of the validating
/// constructors: an instance with an invalid name or age cannot exist.
/// The entity is immutable; any change produces a new instance. The
/// identifier is absent until the repository persists the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<Uuid>,
    name: String,
    email: UserEmail,
    age: i32,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a new, not-yet-persisted user.
    ///
    /// The creation timestamp is taken once, here, and never changes.
    pub fn new(name: impl Into<String>, email: UserEmail, age: i32) -> DomainResult<Self> {
        Self::restore(None, name, email, age, Utc::now())
    }

    /// Rebuild a user from stored attributes.
    ///
    /// Runs the same validation as [`User::new`]; a stored row that no
    /// longer satisfies the invariants surfaces as an error instead of a
    /// silently invalid entity.
    pub fn restore(
        id: Option<Uuid>,
        name: impl Into<String>,
        email: UserEmail,
        age: i32,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::BlankName);
        }
        if !(MIN_USER_AGE..=MAX_USER_AGE).contains(&age) {
            return Err(DomainError::InvalidAge(age));
        }

        Ok(Self {
            id,
            name,
            email,
            age,
            created_at,
        })
    }

    /// Return the persisted form of this user, carrying the assigned
    /// identifier. All other attributes are unchanged.
    pub fn with_id(self, id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &UserEmail {
        &self.email
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Check whether the user is an adult.
    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// Business rule: only adults receive promotional email.
    pub fn can_receive_promotional_emails(&self) -> bool {
        self.is_adult()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    /// Unique user identifier (absent for a not-yet-persisted user)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
    /// User age in years
    pub age: i32,
    /// Whether the user is an adult
    pub is_adult: bool,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_owned(),
            email: user.email().to_string(),
            age: user.age(),
            is_adult: user.is_adult(),
            created_at: user.created_at(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
