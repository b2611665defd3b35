//! User domain service - orchestrates the repository and notifier ports.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{User, UserEmail};

use crate::notifier::EmailNotifier;
use crate::repository::UserRepository;

/// Inbound port for user management use cases.
///
/// Absent entities are `None`, not errors; only the transport layer decides
/// what "not found" means to a caller.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user and send the welcome email
    async fn create_user(&self, name: String, email: String, age: i32) -> AppResult<User>;

    /// Look up a user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Look up a user by raw email; fails on a malformed address
    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users in insertion order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Delete a user. Returns whether a user existed and was removed;
    /// deleting an unknown ID is not a failure.
    async fn delete_user(&self, id: Uuid) -> AppResult<bool>;

    /// Send a promotional email to every user allowed to receive one
    async fn send_promotional_email_to_eligible_users(&self, content: &str) -> AppResult<()>;
}

/// Concrete implementation of UserService.
///
/// Stateless: all state lives behind the repository port, so a single
/// instance is safe to share across concurrent callers.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    notifier: Arc<dyn EmailNotifier>,
}

impl UserManager {
    /// Create new user service instance with its outbound ports
    pub fn new(repo: Arc<dyn UserRepository>, notifier: Arc<dyn EmailNotifier>) -> Self {
        Self { repo, notifier }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, name: String, email: String, age: i32) -> AppResult<User> {
        let email = UserEmail::parse(&email)?;

        // Early exit for an already-taken email. This check-then-act is not
        // atomic: two concurrent creates with the same email can both pass
        // it. The unique index on users.email is the authoritative guard and
        // the store reports its violation as the same conflict.
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email"));
        }

        let user = User::new(name, email, age)?;
        let user = self.repo.save(user).await?;

        // The user is already persisted; a failed welcome email is logged
        // and the call still succeeds. No rollback.
        if let Err(err) = self.notifier.send_welcome(&user).await {
            tracing::warn!(
                user_id = ?user.id(),
                email = %user.email(),
                error = %err,
                "Welcome email failed after user was created"
            );
        }

        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> AppResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let email = UserEmail::parse(email)?;
        self.repo.find_by_email(&email).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<bool> {
        self.repo.delete(id).await
    }

    async fn send_promotional_email_to_eligible_users(&self, content: &str) -> AppResult<()> {
        let eligible: Vec<User> = self
            .repo
            .list()
            .await?
            .into_iter()
            .filter(User::can_receive_promotional_emails)
            .collect();

        tracing::info!(recipients = eligible.len(), "Dispatching promotional email");

        // One independent send per recipient: a failure is logged for that
        // recipient and never aborts the remaining sends.
        let sends = eligible.iter().map(|user| async move {
            if let Err(err) = self.notifier.send_promotional(user, content).await {
                tracing::warn!(
                    email = %user.email(),
                    error = %err,
                    "Promotional email failed for recipient"
                );
            }
        });
        join_all(sends).await;

        Ok(())
    }
}
