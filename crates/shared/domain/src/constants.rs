//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Age
// =============================================================================

/// Minimum accepted user age
pub const MIN_USER_AGE: i32 = 0;

/// Maximum accepted user age
pub const MAX_USER_AGE: i32 = 150;

/// Age at which a user is considered an adult
pub const ADULT_AGE: i32 = 18;

// =============================================================================
// Email
// =============================================================================

/// Structural pattern a valid email address must match (`local@domain.tld`)
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
