//! Reader comments on posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Comment domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub body: String,
    /// Moderation flag set by editors; stored and returned as-is, reads do not filter on it
    pub approved: bool,
    pub post: Uuid,
    pub user: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment creation data transfer object
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewComment {
    #[validate(length(min = 1, message = "body is required"))]
    pub body: String,
    pub approved: bool,
    pub post: Uuid,
    pub user: Option<Uuid>,
}
