//! Common utilities shared across crates.
//!
//! Provides unified error handling with HTTP response conversion.

pub mod error;

pub use error::{AppError, AppResult, OptionExt};
