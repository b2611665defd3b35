//! Notification layer - outbound email contract and its adapter.

mod email_notifier;

pub use email_notifier::{EmailNotifier, Mailer, MailerConfig};
