//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Administrator role with full access
pub const ROLE_ADMIN: &str = "admin";

/// Editor role, also the default for new users
pub const ROLE_EDITOR: &str = "editor";

// =============================================================================
// Post Status
// =============================================================================

pub const STATUS_DRAFT: &str = "draft";

pub const STATUS_PUBLISHED: &str = "published";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 1;

/// Rejection message for posts dated after the current instant
pub const FUTURE_PUBLISHED_AT_MESSAGE: &str = "Published posts cannot have a future date.";

// =============================================================================
// Pagination
// =============================================================================

/// Default page number (1-based)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Default documents per page
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Upper bound for a single page
pub const MAX_PAGE_SIZE: u64 = 100;

// =============================================================================
// Media
// =============================================================================

/// Path prefix under which uploaded files are served
pub const MEDIA_URL_PREFIX: &str = "/media";
