//! Email notification port and adapter.
//!
//! In development mode (no SMTP configured), emails are logged instead of
//! sent. Delivery timeouts and retries belong here, not in the domain
//! service.

use std::env;
use std::time::Duration;

use async_trait::async_trait;

use common::AppResult;
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Outbound notification contract the domain service depends on.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmailNotifier: Send + Sync {
    /// Send the welcome message to a newly registered user
    async fn send_welcome(&self, user: &User) -> AppResult<()>;

    /// Send a promotional message to a single user
    async fn send_promotional(&self, user: &User, content: &str) -> AppResult<()>;
}

/// SMTP configuration from environment.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_from: String,
}

impl MailerConfig {
    pub fn from_env() -> Self {
        Self {
            smtp_host: env::var("SMTP_HOST").ok(),
            smtp_port: env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(587),
            smtp_from: env::var("SMTP_FROM").unwrap_or_else(|_| "noreply@example.com".to_string()),
        }
    }

    fn is_configured(&self) -> bool {
        self.smtp_host.is_some()
    }
}

/// Email adapter. Without SMTP settings it degrades to logging each
/// delivery, which is the only mode this service currently ships.
pub struct Mailer {
    config: MailerConfig,
}

impl Mailer {
    pub fn new(config: MailerConfig) -> Self {
        Self { config }
    }

    async fn deliver(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        if !self.config.is_configured() {
            // Development mode: log the email instead of sending
            tracing::info!(
                from = %self.config.smtp_from,
                to = %to,
                subject = %subject,
                body = %body,
                "SMTP not configured - logging email instead of sending"
            );
            return Ok(());
        }

        // TODO: wire up lettre for real SMTP delivery once an outbound relay
        // exists; until then configured hosts get the simulated send below.
        tokio::time::sleep(Duration::from_millis(100)).await;
        tracing::info!(to = %to, subject = %subject, "Email sent");
        Ok(())
    }
}

#[async_trait]
impl EmailNotifier for Mailer {
    async fn send_welcome(&self, user: &User) -> AppResult<()> {
        tracing::info!(to = %user.email(), name = %user.name(), "Sending welcome email");

        let body = format!(
            "Hello {}, welcome aboard! Your account is ready.",
            user.name()
        );
        self.deliver(user.email().as_str(), "Welcome!", &body).await?;

        tracing::info!(to = %user.email(), "Welcome email sent");
        Ok(())
    }

    async fn send_promotional(&self, user: &User, content: &str) -> AppResult<()> {
        tracing::info!(to = %user.email(), "Sending promotional email");
        tracing::debug!(content = %content, "Promotional email content");

        self.deliver(user.email().as_str(), "Special offer", content)
            .await?;

        tracing::info!(to = %user.email(), "Promotional email sent");
        Ok(())
    }
}
